//! The fixed seed dataset and the bulk loader that writes it.
//!
//! The loader pushes every record through the idempotent inserts of
//! [`HotelStore`], parents before children, so running it against an already
//! seeded store changes nothing.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
  entity::{Customer, Employee, Hotel, HotelChain, HotelRoom},
  reservation::{InsertOutcome, Reservation},
  store::HotelStore,
};

// ─── Summary ─────────────────────────────────────────────────────────────────

/// Counts of seed records written versus already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
  pub inserted:        usize,
  pub already_present: usize,
}

impl SeedSummary {
  fn record(&mut self, outcome: InsertOutcome) {
    match outcome {
      InsertOutcome::Inserted => self.inserted += 1,
      InsertOutcome::AlreadyExists => self.already_present += 1,
    }
  }
}

// ─── Loader ──────────────────────────────────────────────────────────────────

/// Write the seed dataset into `store` in dependency order: chains, hotels,
/// employees, rooms, customers, reservations.
pub async fn load<S: HotelStore>(store: &S) -> Result<SeedSummary, S::Error> {
  let mut summary = SeedSummary::default();

  for chain in hotel_chains() {
    summary.record(store.insert_hotel_chain(chain).await?);
  }
  for hotel in hotels() {
    summary.record(store.insert_hotel(hotel).await?);
  }
  for employee in employees() {
    summary.record(store.insert_employee(employee).await?);
  }
  for room in hotel_rooms() {
    summary.record(store.insert_hotel_room(room).await?);
  }
  for customer in customers() {
    summary.record(store.insert_customer(customer).await?);
  }
  for reservation in reservations() {
    summary.record(store.insert_reservation(reservation).await?);
  }

  Ok(summary)
}

// ─── Dataset ─────────────────────────────────────────────────────────────────

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
  match NaiveDate::from_ymd_opt(year, month, day) {
    Some(date) => date,
    None => panic!("invalid seed date"),
  }
}

const MAPLE_OFFICE: &str = "12 Harbour Street, Toronto, ON";
const LAKESHORE_OFFICE: &str = "400 Market Avenue, Chicago, IL";
const FLEUR_OFFICE: &str = "9 Rue Royale, Montreal, QC";

const MAPLE_DOWNTOWN: &str = "88 King Street West, Toronto, ON";
const MAPLE_AIRPORT: &str = "6100 Airport Road, Mississauga, ON";
const LAKESHORE_LOOP: &str = "210 Wacker Drive, Chicago, IL";
const LAKESHORE_NAVY_PIER: &str = "700 Grand Avenue, Chicago, IL";
const FLEUR_VIEUX_PORT: &str = "15 Rue de la Commune, Montreal, QC";
const INDEPENDENT_INN: &str = "3 Cabot Trail, Ingonish, NS";

pub fn hotel_chains() -> Vec<HotelChain> {
  let chain = |office: &str, name: &str, num_hotels, email: &str, phone: &str| {
    HotelChain {
      central_office_address: office.into(),
      chain_name:             name.into(),
      num_hotels,
      email_address:          email.into(),
      phone_number:           phone.into(),
    }
  };

  vec![
    chain(MAPLE_OFFICE, "Maple Suites", 2, "info@maplesuites.example", "416-555-0100"),
    chain(LAKESHORE_OFFICE, "Lakeshore Hotels", 2, "hello@lakeshore.example", "312-555-0142"),
    chain(FLEUR_OFFICE, "Fleur Hospitality", 1, "bonjour@fleur.example", "514-555-0199"),
  ]
}

pub fn hotels() -> Vec<Hotel> {
  let hotel = |address: &str, office: Option<&str>, area: &str, star_rating, num_rooms, contact: &str| {
    Hotel {
      hotel_address:          address.into(),
      central_office_address: office.map(str::to_owned),
      area:                   area.into(),
      star_rating,
      num_rooms,
      contact_info:           contact.into(),
    }
  };

  vec![
    hotel(MAPLE_DOWNTOWN, Some(MAPLE_OFFICE), "Toronto Downtown", 4, 3, "416-555-0110"),
    hotel(MAPLE_AIRPORT, Some(MAPLE_OFFICE), "Toronto Airport", 3, 2, "905-555-0120"),
    hotel(LAKESHORE_LOOP, Some(LAKESHORE_OFFICE), "Chicago Loop", 5, 2, "312-555-0150"),
    hotel(LAKESHORE_NAVY_PIER, Some(LAKESHORE_OFFICE), "Chicago Streeterville", 3, 2, "312-555-0160"),
    hotel(FLEUR_VIEUX_PORT, Some(FLEUR_OFFICE), "Old Montreal", 4, 2, "514-555-0170"),
    hotel(INDEPENDENT_INN, None, "Cape Breton", 2, 1, "902-555-0180"),
  ]
}

/// Supervisors precede their reports.
pub fn employees() -> Vec<Employee> {
  let employee = |id, supervisor, hotel: &str, name: &str, position: &str| Employee {
    employee_id:   id,
    supervisor_id: supervisor,
    hotel_address: hotel.into(),
    full_name:     name.into(),
    position:      position.into(),
  };

  vec![
    employee(1, None, MAPLE_DOWNTOWN, "Alicia Moreau", "General Manager"),
    employee(2, Some(1), MAPLE_DOWNTOWN, "Benoit Tremblay", "Front Desk"),
    employee(3, Some(1), MAPLE_DOWNTOWN, "Chen Wei", "Housekeeping"),
    employee(4, None, MAPLE_AIRPORT, "Dana Okafor", "General Manager"),
    employee(5, Some(4), MAPLE_AIRPORT, "Eli Novak", "Front Desk"),
    employee(6, None, LAKESHORE_LOOP, "Farah Haddad", "General Manager"),
    employee(7, Some(6), LAKESHORE_NAVY_PIER, "Gus Lindqvist", "Front Desk"),
    employee(8, None, FLEUR_VIEUX_PORT, "Helene Gagnon", "General Manager"),
    employee(9, None, INDEPENDENT_INN, "Ian MacNeil", "Owner"),
  ]
}

pub fn hotel_rooms() -> Vec<HotelRoom> {
  let room = |hotel: &str, number, capacity, view: &str, extendability, price, amenities: &str| {
    HotelRoom {
      hotel_address: hotel.into(),
      room_number: number,
      capacity,
      view_type: view.into(),
      extendability,
      price,
      damages: String::new(),
      amenities: amenities.into(),
    }
  };

  let mut rooms = vec![
    room(MAPLE_DOWNTOWN, 101, 1, "city", false, 149.0, "wifi"),
    room(MAPLE_DOWNTOWN, 102, 2, "city", true, 189.0, "wifi, minibar"),
    room(MAPLE_DOWNTOWN, 201, 4, "lake", true, 329.0, "wifi, minibar, kitchenette"),
    room(MAPLE_AIRPORT, 110, 2, "runway", false, 119.0, "wifi"),
    room(MAPLE_AIRPORT, 111, 3, "parking", true, 139.0, "wifi, tv"),
    room(LAKESHORE_LOOP, 1201, 2, "river", false, 299.0, "wifi, minibar, tv"),
    room(LAKESHORE_LOOP, 1401, 5, "skyline", true, 549.0, "wifi, minibar, tv, jacuzzi"),
    room(LAKESHORE_NAVY_PIER, 305, 2, "lake", false, 179.0, "wifi, tv"),
    room(LAKESHORE_NAVY_PIER, 306, 4, "lake", true, 229.0, "wifi, tv, sofa bed"),
    room(FLEUR_VIEUX_PORT, 12, 2, "river", false, 209.0, "wifi, espresso"),
    room(FLEUR_VIEUX_PORT, 14, 3, "street", true, 239.0, "wifi, espresso"),
    room(INDEPENDENT_INN, 1, 2, "ocean", false, 99.0, "wood stove"),
  ];
  if let Some(worn) = rooms.iter_mut().find(|r| r.room_number == 110) {
    worn.damages = "cracked bathroom tile".into();
  }
  rooms
}

pub fn customers() -> Vec<Customer> {
  let customer = |id, name: &str, address: &str, registered| Customer {
    customer_id:              id,
    full_name:                name.into(),
    address:                  address.into(),
    system_registration_date: registered,
  };

  vec![
    customer(1001, "Maya Singh", "55 Elm Street, Ottawa, ON", ymd(2024, 1, 15)),
    customer(1002, "Tomas Ruiz", "1200 Pine Road, Denver, CO", ymd(2024, 2, 3)),
    customer(1003, "Grace Liu", "8 Birch Lane, Halifax, NS", ymd(2024, 3, 21)),
  ]
}

pub fn reservations() -> Vec<Reservation> {
  let reservation = |customer, hotel: &str, room, check_in, check_out| Reservation {
    customer_id:    customer,
    hotel_address:  hotel.into(),
    room_number:    room,
    check_in_date:  check_in,
    check_out_date: check_out,
  };

  vec![
    reservation(1001, MAPLE_DOWNTOWN, 102, ymd(2024, 6, 10), ymd(2024, 6, 14)),
    reservation(1002, LAKESHORE_LOOP, 1401, ymd(2024, 7, 1), ymd(2024, 7, 5)),
    reservation(1003, FLEUR_VIEUX_PORT, 12, ymd(2024, 8, 20), ymd(2024, 8, 23)),
    reservation(1001, INDEPENDENT_INN, 1, ymd(2024, 9, 2), ymd(2024, 9, 9)),
  ]
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn hotels_reference_seeded_chains() {
    let offices: HashSet<_> = hotel_chains()
      .into_iter()
      .map(|c| c.central_office_address)
      .collect();
    for hotel in hotels() {
      if let Some(office) = &hotel.central_office_address {
        assert!(offices.contains(office), "{office} not seeded");
      }
    }
  }

  #[test]
  fn supervisors_precede_reports() {
    let mut seen = HashSet::new();
    for employee in employees() {
      employee.validate().unwrap();
      if let Some(supervisor) = employee.supervisor_id {
        assert!(seen.contains(&supervisor), "supervisor {supervisor} loaded late");
      }
      seen.insert(employee.employee_id);
    }
  }

  #[test]
  fn reservations_reference_seeded_rooms_and_customers() {
    let rooms: HashSet<_> = hotel_rooms()
      .into_iter()
      .map(|r| (r.hotel_address, r.room_number))
      .collect();
    let customer_ids: HashSet<_> =
      customers().into_iter().map(|c| c.customer_id).collect();

    for r in reservations() {
      assert!(rooms.contains(&(r.hotel_address.clone(), r.room_number)));
      assert!(customer_ids.contains(&r.customer_id));
      assert!(r.check_in_date < r.check_out_date);
    }
  }

  #[test]
  fn room_keys_are_unique() {
    let rooms = hotel_rooms();
    let keys: HashSet<_> = rooms
      .iter()
      .map(|r| (r.hotel_address.as_str(), r.room_number))
      .collect();
    assert_eq!(keys.len(), rooms.len());
  }
}

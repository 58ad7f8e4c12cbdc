//! Encoding and decoding helpers between Rust domain types and the values
//! stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` text so that string comparison matches
//! calendar order. Booleans go through rusqlite's native `1` / `0` mapping.

use chrono::NaiveDate;
use hotel_core::{
  entity::{Customer, Employee, Hotel, HotelChain, HotelRoom},
  reservation::{Reservation, StayDates},
  search::RoomListing,
};
use rusqlite::Row;

use crate::{Error, Result};

// ─── NaiveDate ───────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Plain rows ──────────────────────────────────────────────────────────────
//
// These tables hold nothing that needs decoding beyond rusqlite's own
// conversions, so rows map straight to domain types.

pub const CHAIN_COLUMNS: &str =
  "central_office_address, chain_name, num_hotels, email_address, phone_number";

pub fn chain_from_row(row: &Row<'_>) -> rusqlite::Result<HotelChain> {
  Ok(HotelChain {
    central_office_address: row.get(0)?,
    chain_name:             row.get(1)?,
    num_hotels:             row.get(2)?,
    email_address:          row.get(3)?,
    phone_number:           row.get(4)?,
  })
}

pub const HOTEL_COLUMNS: &str =
  "hotel_address, central_office_address, area, star_rating, num_rooms, contact_info";

pub fn hotel_from_row(row: &Row<'_>) -> rusqlite::Result<Hotel> {
  Ok(Hotel {
    hotel_address:          row.get(0)?,
    central_office_address: row.get(1)?,
    area:                   row.get(2)?,
    star_rating:            row.get(3)?,
    num_rooms:              row.get(4)?,
    contact_info:           row.get(5)?,
  })
}

pub const EMPLOYEE_COLUMNS: &str =
  "employee_id, supervisor_id, hotel_address, full_name, position";

pub fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
  Ok(Employee {
    employee_id:   row.get(0)?,
    supervisor_id: row.get(1)?,
    hotel_address: row.get(2)?,
    full_name:     row.get(3)?,
    position:      row.get(4)?,
  })
}

pub const ROOM_COLUMNS: &str = "hotel_address, room_number, capacity, view_type, \
                                extendability, price, damages, amenities";

pub fn room_from_row(row: &Row<'_>) -> rusqlite::Result<HotelRoom> {
  Ok(HotelRoom {
    hotel_address: row.get(0)?,
    room_number:   row.get(1)?,
    capacity:      row.get(2)?,
    view_type:     row.get(3)?,
    extendability: row.get(4)?,
    price:         row.get(5)?,
    damages:       row.get(6)?,
    amenities:     row.get(7)?,
  })
}

/// Column order matches [`crate::query::ROOM_LISTING_SELECT`].
pub fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<RoomListing> {
  Ok(RoomListing {
    chain_name:    row.get(0)?,
    hotel_address: row.get(1)?,
    area:          row.get(2)?,
    star_rating:   row.get(3)?,
    room_number:   row.get(4)?,
    capacity:      row.get(5)?,
    view_type:     row.get(6)?,
    extendability: row.get(7)?,
    price:         row.get(8)?,
  })
}

// ─── Dated rows ──────────────────────────────────────────────────────────────

pub const CUSTOMER_COLUMNS: &str =
  "customer_id, full_name, address, system_registration_date";

/// Raw values read directly from a `Customers` row.
pub struct RawCustomer {
  pub customer_id:              i64,
  pub full_name:                String,
  pub address:                  String,
  pub system_registration_date: String,
}

impl RawCustomer {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      customer_id:              row.get(0)?,
      full_name:                row.get(1)?,
      address:                  row.get(2)?,
      system_registration_date: row.get(3)?,
    })
  }

  pub fn into_customer(self) -> Result<Customer> {
    Ok(Customer {
      customer_id:              self.customer_id,
      full_name:                self.full_name,
      address:                  self.address,
      system_registration_date: decode_date(&self.system_registration_date)?,
    })
  }
}

pub const RESERVATION_COLUMNS: &str =
  "customer_id, hotel_address, room_number, check_in_date, check_out_date";

/// Raw values read from a `Reservations` or `Booking_History` row.
pub struct RawReservation {
  pub customer_id:    i64,
  pub hotel_address:  String,
  pub room_number:    i64,
  pub check_in_date:  String,
  pub check_out_date: String,
}

impl RawReservation {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      customer_id:    row.get(0)?,
      hotel_address:  row.get(1)?,
      room_number:    row.get(2)?,
      check_in_date:  row.get(3)?,
      check_out_date: row.get(4)?,
    })
  }

  pub fn into_reservation(self) -> Result<Reservation> {
    Ok(Reservation {
      customer_id:    self.customer_id,
      hotel_address:  self.hotel_address,
      room_number:    self.room_number,
      check_in_date:  decode_date(&self.check_in_date)?,
      check_out_date: decode_date(&self.check_out_date)?,
    })
  }
}

/// Raw check-in / check-out pair.
pub struct RawStay {
  pub check_in_date:  String,
  pub check_out_date: String,
}

impl RawStay {
  pub fn into_stay(self) -> Result<StayDates> {
    Ok(StayDates {
      check_in_date:  decode_date(&self.check_in_date)?,
      check_out_date: decode_date(&self.check_out_date)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn date_roundtrip() {
    let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(encode_date(d), "2024-02-29");
    assert_eq!(decode_date("2024-02-29").unwrap(), d);
  }

  #[test]
  fn malformed_date_is_reported() {
    let err = decode_date("29/02/2024").unwrap_err();
    assert!(matches!(err, Error::DateParse(_)));
  }
}

//! [`SqliteStore`]: the SQLite implementation of [`HotelStore`].

use std::{fmt::Display, path::Path};

use hotel_core::{
  entity::{Customer, Employee, Hotel, HotelChain, HotelRoom},
  reservation::{InsertOutcome, Reservation, StayDates},
  search::{RoomBounds, RoomListing, RoomSearch},
  store::HotelStore,
};
use rusqlite::{Connection, OptionalExtension as _, TransactionBehavior, params};
use tracing::{debug, info};

use crate::{
  Result,
  encode::{
    CHAIN_COLUMNS, CUSTOMER_COLUMNS, EMPLOYEE_COLUMNS, HOTEL_COLUMNS,
    RESERVATION_COLUMNS, ROOM_COLUMNS, RawCustomer, RawReservation, RawStay,
    chain_from_row, employee_from_row, encode_date, hotel_from_row,
    listing_from_row, room_from_row,
  },
  query::room_search,
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A hotel reservation store backed by a single SQLite file.
///
/// All statements run on one dedicated connection thread, in the order they
/// are submitted. Cloning is cheap; the inner connection is
/// reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    let conn = tokio_rusqlite::Connection::open(&path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    info!(path = %path.display(), "opened hotel store");
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Create any missing tables, indexes, and triggers. Safe to call again on
  /// an initialised store.
  pub async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a `SELECT` with no parameters, mapping each row with `map`.
  async fn select_all<T, F>(&self, sql: String, map: F) -> Result<Vec<T>>
  where
    T: Send + 'static,
    F: Fn(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| map(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

/// Log and pass through the outcome of an idempotent insert.
fn guarded(kind: &str, key: impl Display, outcome: InsertOutcome) -> InsertOutcome {
  if !outcome.is_inserted() {
    debug!(%key, "{kind} already exists; insert skipped");
  }
  outcome
}

/// Log a gated mutation that found nothing to act on.
fn gated(action: &str, key: impl Display, found: bool) -> bool {
  if !found {
    debug!(%key, "{action} skipped; no such row");
  }
  found
}

/// Evaluate an `EXISTS` probe.
fn exists(
  conn: &Connection,
  sql: &str,
  params: impl rusqlite::Params,
) -> rusqlite::Result<bool> {
  conn.query_row(sql, params, |r| r.get(0))
}

// ─── HotelStore impl ─────────────────────────────────────────────────────────

impl HotelStore for SqliteStore {
  type Error = crate::Error;

  // ── Idempotent inserts ────────────────────────────────────────────────────

  async fn insert_hotel_chain(&self, chain: HotelChain) -> Result<InsertOutcome> {
    let key = chain.central_office_address.clone();

    let changes = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT INTO Hotel_Chains (
             central_office_address, chain_name, num_hotels, email_address, phone_number
           ) VALUES (?1, ?2, ?3, ?4, ?5)
           ON CONFLICT DO NOTHING",
          params![
            chain.central_office_address,
            chain.chain_name,
            chain.num_hotels,
            chain.email_address,
            chain.phone_number,
          ],
        )?)
      })
      .await?;

    Ok(guarded("hotel chain", key, InsertOutcome::from_changes(changes)))
  }

  async fn insert_hotel(&self, hotel: Hotel) -> Result<InsertOutcome> {
    let key = hotel.hotel_address.clone();

    let changes = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT INTO Hotels (
             hotel_address, central_office_address, area, star_rating, num_rooms, contact_info
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
           ON CONFLICT DO NOTHING",
          params![
            hotel.hotel_address,
            hotel.central_office_address,
            hotel.area,
            hotel.star_rating,
            hotel.num_rooms,
            hotel.contact_info,
          ],
        )?)
      })
      .await?;

    Ok(guarded("hotel", key, InsertOutcome::from_changes(changes)))
  }

  async fn insert_employee(&self, employee: Employee) -> Result<InsertOutcome> {
    employee.validate()?;
    let key = employee.employee_id;

    let changes = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT INTO Employees (
             employee_id, supervisor_id, hotel_address, full_name, position
           ) VALUES (?1, ?2, ?3, ?4, ?5)
           ON CONFLICT DO NOTHING",
          params![
            employee.employee_id,
            employee.supervisor_id,
            employee.hotel_address,
            employee.full_name,
            employee.position,
          ],
        )?)
      })
      .await?;

    Ok(guarded("employee", key, InsertOutcome::from_changes(changes)))
  }

  async fn insert_hotel_room(&self, room: HotelRoom) -> Result<InsertOutcome> {
    let key = format!("{} #{}", room.hotel_address, room.room_number);

    let changes = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT INTO Hotel_Rooms (
             hotel_address, room_number, capacity, view_type,
             extendability, price, damages, amenities
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
           ON CONFLICT DO NOTHING",
          params![
            room.hotel_address,
            room.room_number,
            room.capacity,
            room.view_type,
            room.extendability,
            room.price,
            room.damages,
            room.amenities,
          ],
        )?)
      })
      .await?;

    Ok(guarded("room", key, InsertOutcome::from_changes(changes)))
  }

  async fn insert_customer(&self, customer: Customer) -> Result<InsertOutcome> {
    let key = customer.customer_id;
    let registered = encode_date(customer.system_registration_date);

    let changes = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT INTO Customers (
             customer_id, full_name, address, system_registration_date
           ) VALUES (?1, ?2, ?3, ?4)
           ON CONFLICT DO NOTHING",
          params![customer.customer_id, customer.full_name, customer.address, registered],
        )?)
      })
      .await?;

    Ok(guarded("customer", key, InsertOutcome::from_changes(changes)))
  }

  async fn insert_reservation(&self, reservation: Reservation) -> Result<InsertOutcome> {
    let key = format!(
      "customer {} at {} #{} from {}",
      reservation.customer_id,
      reservation.hotel_address,
      reservation.room_number,
      reservation.check_in_date,
    );
    let check_in = encode_date(reservation.check_in_date);
    let check_out = encode_date(reservation.check_out_date);

    // `archive_booking` fires only when a row is actually written.
    let changes = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT INTO Reservations (
             customer_id, hotel_address, room_number, check_in_date, check_out_date
           ) VALUES (?1, ?2, ?3, ?4, ?5)
           ON CONFLICT DO NOTHING",
          params![
            reservation.customer_id,
            reservation.hotel_address,
            reservation.room_number,
            check_in,
            check_out,
          ],
        )?)
      })
      .await?;

    Ok(guarded("reservation", key, InsertOutcome::from_changes(changes)))
  }

  async fn insert_booking_archive(&self, booking: Reservation) -> Result<InsertOutcome> {
    let key = format!(
      "customer {} at {} #{} from {}",
      booking.customer_id, booking.hotel_address, booking.room_number, booking.check_in_date,
    );
    let check_in = encode_date(booking.check_in_date);
    let check_out = encode_date(booking.check_out_date);

    // Booking_History has no key to conflict on, so probe and insert under
    // one write lock instead.
    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let found = exists(
          &tx,
          "SELECT EXISTS(
             SELECT 1 FROM Booking_History
             WHERE customer_id = ?1 AND hotel_address = ?2
               AND room_number = ?3 AND check_in_date = ?4
           )",
          params![booking.customer_id, booking.hotel_address, booking.room_number, check_in],
        )?;
        if found {
          return Ok(InsertOutcome::AlreadyExists);
        }

        tx.execute(
          "INSERT INTO Booking_History (
             customer_id, hotel_address, room_number, check_in_date, check_out_date
           ) VALUES (?1, ?2, ?3, ?4, ?5)",
          params![
            booking.customer_id,
            booking.hotel_address,
            booking.room_number,
            check_in,
            check_out,
          ],
        )?;
        tx.commit()?;
        Ok(InsertOutcome::Inserted)
      })
      .await?;

    Ok(guarded("archived booking", key, outcome))
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get_hotel_chains(&self) -> Result<Vec<HotelChain>> {
    self
      .select_all(
        format!("SELECT {CHAIN_COLUMNS} FROM Hotel_Chains ORDER BY chain_name"),
        chain_from_row,
      )
      .await
  }

  async fn get_all_hotel_rooms(&self, options: Option<RoomSearch>) -> Result<Vec<RoomListing>> {
    let query = room_search(options.as_ref());

    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&query.sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(query.params), listing_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn get_hotel_rooms(
    &self,
    hotel_address: String,
    bounds:        RoomBounds,
  ) -> Result<Vec<HotelRoom>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {ROOM_COLUMNS} FROM Hotel_Rooms
           WHERE hotel_address = ?1 AND price >= ?2 AND price <= ?3 AND capacity >= ?4
           ORDER BY room_number"
        ))?;
        let rows = stmt
          .query_map(
            params![hotel_address, bounds.min_price, bounds.max_price, bounds.min_capacity],
            room_from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn get_reservations_for_room(
    &self,
    hotel_address: String,
    room_number:   i64,
  ) -> Result<Vec<StayDates>> {
    let raws: Vec<RawStay> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT check_in_date, check_out_date FROM Reservations
           WHERE hotel_address = ?1 AND room_number = ?2
           ORDER BY check_in_date",
        )?;
        let rows = stmt
          .query_map(params![hotel_address, room_number], |row| {
            Ok(RawStay {
              check_in_date:  row.get(0)?,
              check_out_date: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawStay::into_stay).collect()
  }

  async fn get_total_capacity(&self, hotel_address: String) -> Result<Option<i64>> {
    let total = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT SUM(capacity) FROM Hotel_Rooms WHERE hotel_address = ?1",
          params![hotel_address],
          |r| r.get::<_, Option<i64>>(0),
        )?)
      })
      .await?;
    Ok(total)
  }

  async fn get_all_rooms(&self) -> Result<Vec<HotelRoom>> {
    self
      .select_all(
        format!("SELECT {ROOM_COLUMNS} FROM Hotel_Rooms ORDER BY hotel_address, room_number"),
        room_from_row,
      )
      .await
  }

  async fn get_all_hotels(&self) -> Result<Vec<Hotel>> {
    self
      .select_all(
        format!("SELECT {HOTEL_COLUMNS} FROM Hotels ORDER BY hotel_address"),
        hotel_from_row,
      )
      .await
  }

  async fn get_all_customers(&self) -> Result<Vec<Customer>> {
    let raws = self
      .select_all(
        format!("SELECT {CUSTOMER_COLUMNS} FROM Customers ORDER BY customer_id"),
        RawCustomer::from_row,
      )
      .await?;
    raws.into_iter().map(RawCustomer::into_customer).collect()
  }

  async fn get_all_employees(&self) -> Result<Vec<Employee>> {
    self
      .select_all(
        format!("SELECT {EMPLOYEE_COLUMNS} FROM Employees ORDER BY employee_id"),
        employee_from_row,
      )
      .await
  }

  async fn get_all_reservations(&self) -> Result<Vec<Reservation>> {
    let raws = self
      .select_all(
        format!(
          "SELECT {RESERVATION_COLUMNS} FROM Reservations
           ORDER BY hotel_address, room_number, check_in_date"
        ),
        RawReservation::from_row,
      )
      .await?;
    raws.into_iter().map(RawReservation::into_reservation).collect()
  }

  async fn get_booking_history(&self) -> Result<Vec<Reservation>> {
    let raws = self
      .select_all(
        format!("SELECT {RESERVATION_COLUMNS} FROM Booking_History ORDER BY rowid"),
        RawReservation::from_row,
      )
      .await?;
    raws.into_iter().map(RawReservation::into_reservation).collect()
  }

  // ── Existence-gated mutations ─────────────────────────────────────────────

  async fn update_customer(
    &self,
    customer_id: i64,
    full_name:   String,
    address:     String,
  ) -> Result<bool> {
    let found = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if !exists(
          &tx,
          "SELECT EXISTS(SELECT 1 FROM Customers WHERE customer_id = ?1)",
          params![customer_id],
        )? {
          return Ok(false);
        }
        tx.execute(
          "UPDATE Customers SET full_name = ?1, address = ?2 WHERE customer_id = ?3",
          params![full_name, address, customer_id],
        )?;
        tx.commit()?;
        Ok(true)
      })
      .await?;

    Ok(gated("customer update", customer_id, found))
  }

  async fn update_hotel_room(&self, room: HotelRoom) -> Result<bool> {
    let key = format!("{} #{}", room.hotel_address, room.room_number);

    let found = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if !exists(
          &tx,
          "SELECT EXISTS(
             SELECT 1 FROM Hotel_Rooms WHERE hotel_address = ?1 AND room_number = ?2
           )",
          params![room.hotel_address, room.room_number],
        )? {
          return Ok(false);
        }
        tx.execute(
          "UPDATE Hotel_Rooms
           SET capacity = ?1, view_type = ?2, extendability = ?3, price = ?4,
               damages = ?5, amenities = ?6
           WHERE hotel_address = ?7 AND room_number = ?8",
          params![
            room.capacity,
            room.view_type,
            room.extendability,
            room.price,
            room.damages,
            room.amenities,
            room.hotel_address,
            room.room_number,
          ],
        )?;
        tx.commit()?;
        Ok(true)
      })
      .await?;

    Ok(gated("room update", key, found))
  }

  async fn update_hotel(&self, hotel: Hotel) -> Result<bool> {
    let key = hotel.hotel_address.clone();

    let found = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if !exists(
          &tx,
          "SELECT EXISTS(SELECT 1 FROM Hotels WHERE hotel_address = ?1)",
          params![hotel.hotel_address],
        )? {
          return Ok(false);
        }
        tx.execute(
          "UPDATE Hotels
           SET central_office_address = ?1, area = ?2, star_rating = ?3,
               num_rooms = ?4, contact_info = ?5
           WHERE hotel_address = ?6",
          params![
            hotel.central_office_address,
            hotel.area,
            hotel.star_rating,
            hotel.num_rooms,
            hotel.contact_info,
            hotel.hotel_address,
          ],
        )?;
        tx.commit()?;
        Ok(true)
      })
      .await?;

    Ok(gated("hotel update", key, found))
  }

  async fn delete_customer(&self, customer_id: i64) -> Result<bool> {
    // `delete_customer` trigger removes the reservations first.
    let found = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM Customers WHERE customer_id = ?1", params![customer_id])? > 0)
      })
      .await?;

    Ok(gated("customer delete", customer_id, found))
  }

  async fn delete_hotel_room(&self, hotel_address: String, room_number: i64) -> Result<bool> {
    let key = format!("{hotel_address} #{room_number}");

    // `delete_room_reservations` trigger removes the reservations first.
    let found = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM Hotel_Rooms WHERE hotel_address = ?1 AND room_number = ?2",
          params![hotel_address, room_number],
        )? > 0)
      })
      .await?;

    Ok(gated("room delete", key, found))
  }

  async fn delete_hotel(&self, hotel_address: String) -> Result<bool> {
    let key = hotel_address.clone();

    let found = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let present = tx
          .query_row(
            "SELECT 1 FROM Hotels WHERE hotel_address = ?1",
            params![hotel_address],
            |_| Ok(()),
          )
          .optional()?
          .is_some();
        if !present {
          return Ok(false);
        }

        // Rooms go first; their trigger clears reservations.
        tx.execute("DELETE FROM Hotel_Rooms WHERE hotel_address = ?1", params![hotel_address])?;
        // Staff elsewhere may report to this hotel's employees.
        tx.execute(
          "UPDATE Employees SET supervisor_id = NULL
           WHERE hotel_address != ?1
             AND supervisor_id IN (SELECT employee_id FROM Employees WHERE hotel_address = ?1)",
          params![hotel_address],
        )?;
        tx.execute("DELETE FROM Employees WHERE hotel_address = ?1", params![hotel_address])?;
        tx.execute("DELETE FROM Hotels WHERE hotel_address = ?1", params![hotel_address])?;
        tx.commit()?;
        Ok(true)
      })
      .await?;

    Ok(gated("hotel delete", key, found))
  }
}

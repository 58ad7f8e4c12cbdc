//! Reservations and the booking archive.
//!
//! A reservation is insert-only. It disappears only when its room or customer
//! is deleted. Every reservation ever inserted is mirrored into the booking
//! archive, which is append-only and survives those deletes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A booking of one room by one customer.
///
/// The key is `(customer_id, hotel_address, room_number, check_in_date)`.
/// The check-out date is not part of it, and no overlap check is performed:
/// two reservations of the same room with different check-in dates may cover
/// overlapping nights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
  pub customer_id:    i64,
  pub hotel_address:  String,
  pub room_number:    i64,
  pub check_in_date:  NaiveDate,
  pub check_out_date: NaiveDate,
}

impl Reservation {
  pub fn stay(&self) -> StayDates {
    StayDates {
      check_in_date:  self.check_in_date,
      check_out_date: self.check_out_date,
    }
  }
}

/// The occupied date range of a room, as returned by
/// [`crate::store::HotelStore::get_reservations_for_room`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayDates {
  pub check_in_date:  NaiveDate,
  pub check_out_date: NaiveDate,
}

// ─── Insert outcome ──────────────────────────────────────────────────────────

/// Result of an idempotent insert. Callers must not assume a write happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOutcome {
  Inserted,
  AlreadyExists,
}

impl InsertOutcome {
  pub fn is_inserted(&self) -> bool { matches!(self, Self::Inserted) }

  /// Build from the number of rows an `INSERT` reported as changed.
  pub fn from_changes(changes: usize) -> Self {
    if changes == 0 { Self::AlreadyExists } else { Self::Inserted }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn outcome_from_changes() {
    assert_eq!(InsertOutcome::from_changes(0), InsertOutcome::AlreadyExists);
    assert_eq!(InsertOutcome::from_changes(1), InsertOutcome::Inserted);
    assert!(InsertOutcome::Inserted.is_inserted());
    assert!(!InsertOutcome::AlreadyExists.is_inserted());
  }

  #[test]
  fn outcome_serialises_snake_case() {
    let json = serde_json::to_string(&InsertOutcome::AlreadyExists).unwrap();
    assert_eq!(json, "\"already_exists\"");
  }

  #[test]
  fn stay_copies_dates() {
    let r = Reservation {
      customer_id:    7,
      hotel_address:  "1 Main St".into(),
      room_number:    101,
      check_in_date:  NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
      check_out_date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
    };
    let stay = r.stay();
    assert_eq!(stay.check_in_date, r.check_in_date);
    assert_eq!(stay.check_out_date, r.check_out_date);
  }
}

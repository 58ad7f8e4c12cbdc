//! Persistent entities: chains, hotels, employees, customers, and rooms.
//!
//! Free-text fields are opaque strings; nothing in this crate interprets them.
//! Reservations live in [`crate::reservation`] because their lifecycle differs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Chains and hotels ───────────────────────────────────────────────────────

/// A hotel chain, keyed by its central office address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelChain {
  pub central_office_address: String,
  pub chain_name:             String,
  pub num_hotels:             i64,
  pub email_address:          String,
  pub phone_number:           String,
}

/// A single hotel, keyed by its street address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
  pub hotel_address:          String,
  /// The owning chain. `None` for independents, or when the chain row has not
  /// been written yet.
  pub central_office_address: Option<String>,
  pub area:                   String,
  pub star_rating:            i64,
  pub num_rooms:              i64,
  pub contact_info:           String,
}

// ─── Staff ───────────────────────────────────────────────────────────────────

/// A hotel employee. Supervisors are other employees, so the relation forms a
/// forest rooted at employees without a supervisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub employee_id:   i64,
  pub supervisor_id: Option<i64>,
  pub hotel_address: String,
  pub full_name:     String,
  pub position:      String,
}

impl Employee {
  /// Reject the one cycle the foreign key cannot catch: an employee naming
  /// itself as supervisor. Longer cycles are impossible because a supervisor
  /// must already exist when the subordinate is inserted.
  pub fn validate(&self) -> Result<()> {
    if self.supervisor_id == Some(self.employee_id) {
      return Err(Error::SelfSupervision(self.employee_id));
    }
    Ok(())
  }
}

// ─── Guests ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
  pub customer_id:              i64,
  pub full_name:                String,
  pub address:                  String,
  pub system_registration_date: NaiveDate,
}

// ─── Rooms ───────────────────────────────────────────────────────────────────

/// A bookable room, keyed by `(hotel_address, room_number)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRoom {
  pub hotel_address: String,
  pub room_number:   i64,
  pub capacity:      i64,
  pub view_type:     String,
  /// Whether an extra bed can be added.
  pub extendability: bool,
  pub price:         f64,
  pub damages:       String,
  pub amenities:     String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn employee(id: i64, supervisor: Option<i64>) -> Employee {
    Employee {
      employee_id:   id,
      supervisor_id: supervisor,
      hotel_address: "1 Main St".into(),
      full_name:     "Pat Doe".into(),
      position:      "Concierge".into(),
    }
  }

  #[test]
  fn employee_without_supervisor_is_valid() {
    assert!(employee(1, None).validate().is_ok());
  }

  #[test]
  fn employee_with_other_supervisor_is_valid() {
    assert!(employee(2, Some(1)).validate().is_ok());
  }

  #[test]
  fn self_supervision_is_rejected() {
    let err = employee(3, Some(3)).validate().unwrap_err();
    assert!(matches!(err, Error::SelfSupervision(3)));
  }
}

//! Room-search query builder.
//!
//! Turns an optional [`RoomSearch`] into one parameterised statement. Filter
//! values only ever travel as bound parameters; the SQL text is assembled
//! from fixed fragments and `?` placeholders.

use hotel_core::search::RoomSearch;
use rusqlite::types::Value;

/// Chain to hotel is an outer join so hotels without a chain row still
/// appear; hotel to room is an inner join so orphaned rooms do not.
pub const ROOM_LISTING_SELECT: &str = "SELECT
    hc.chain_name, h.hotel_address, h.area, h.star_rating,
    hr.room_number, hr.capacity, hr.view_type, hr.extendability, hr.price
  FROM Hotel_Chains hc
  FULL OUTER JOIN Hotels h ON hc.central_office_address = h.central_office_address
  INNER JOIN Hotel_Rooms hr ON h.hotel_address = hr.hotel_address";

const ROOM_LISTING_ORDER: &str = " ORDER BY h.hotel_address, hr.room_number";

/// A statement plus its positional parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomQuery {
  pub sql:    String,
  pub params: Vec<Value>,
}

/// Build the room-search statement.
///
/// `None` and a search whose options are all unset both produce the bare
/// join.
pub fn room_search(options: Option<&RoomSearch>) -> RoomQuery {
  let mut clauses: Vec<String> = Vec::new();
  let mut params: Vec<Value> = Vec::new();

  if let Some(options) = options {
    if let Some(names) = options.chain_filter() {
      let placeholders = vec!["?"; names.len()].join(", ");
      clauses.push(format!("hc.chain_name IN ({placeholders})"));
      params.extend(names.iter().cloned().map(Value::Text));
    }

    if let Some(pattern) = options.area_pattern() {
      clauses.push("h.area LIKE ?".to_owned());
      params.push(Value::Text(pattern));
    }

    if let Some(rating) = options.star_rating_floor() {
      clauses.push("h.star_rating >= ?".to_owned());
      params.push(Value::Integer(rating));
    }

    if let Some(max) = options.price_ceiling() {
      clauses.push("hr.price <= ?".to_owned());
      params.push(Value::Real(max));
    }

    if let Some(min) = options.price_floor() {
      clauses.push("hr.price >= ?".to_owned());
      params.push(Value::Real(min));
    }

    if let Some(capacity) = options.capacity_floor() {
      clauses.push("hr.capacity >= ?".to_owned());
      params.push(Value::Integer(capacity));
    }
  }

  let mut sql = ROOM_LISTING_SELECT.to_owned();
  if !clauses.is_empty() {
    sql.push_str(" WHERE ");
    sql.push_str(&clauses.join(" AND "));
  }
  sql.push_str(ROOM_LISTING_ORDER);

  RoomQuery { sql, params }
}

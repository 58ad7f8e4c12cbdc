//! Room search filters and the denormalised rows they produce.
//!
//! Numeric filters use zero (or any non-positive value) to mean "no
//! constraint". An empty area string and an empty chain list, or one whose
//! first entry is empty, are likewise ignored.

use serde::{Deserialize, Serialize};

// ─── Filter options ──────────────────────────────────────────────────────────

/// Options for [`crate::store::HotelStore::get_all_hotel_rooms`].
///
/// Every option contributes at most one predicate; the predicates are joined
/// with `AND`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSearch {
  /// Restrict to rooms whose hotel belongs to one of these chains.
  pub chain_names:  Vec<String>,
  /// Substring match over the hotel's area.
  pub area:         String,
  /// Minimum star rating, inclusive.
  pub star_rating:  i64,
  /// Inclusive upper price bound.
  pub max_price:    f64,
  /// Inclusive lower price bound.
  pub min_price:    f64,
  /// Minimum room capacity, inclusive.
  pub min_capacity: i64,
}

impl RoomSearch {
  /// Chain names to match, if the chain filter is active.
  ///
  /// Only the first entry decides whether the filter applies; when it does,
  /// every listed name takes part in the membership test.
  pub fn chain_filter(&self) -> Option<&[String]> {
    match self.chain_names.first() {
      Some(first) if !first.is_empty() => Some(&self.chain_names),
      _ => None,
    }
  }

  /// `LIKE` pattern for the area filter, wildcarded on both sides.
  pub fn area_pattern(&self) -> Option<String> {
    (!self.area.is_empty()).then(|| format!("%{}%", self.area))
  }

  pub fn star_rating_floor(&self) -> Option<i64> {
    (self.star_rating > 0).then_some(self.star_rating)
  }

  pub fn price_ceiling(&self) -> Option<f64> {
    (self.max_price > 0.0).then_some(self.max_price)
  }

  pub fn price_floor(&self) -> Option<f64> {
    (self.min_price > 0.0).then_some(self.min_price)
  }

  pub fn capacity_floor(&self) -> Option<i64> {
    (self.min_capacity > 0).then_some(self.min_capacity)
  }

  /// `true` when no option would contribute a predicate.
  pub fn is_unconstrained(&self) -> bool {
    self.chain_filter().is_none()
      && self.area_pattern().is_none()
      && self.star_rating_floor().is_none()
      && self.price_ceiling().is_none()
      && self.price_floor().is_none()
      && self.capacity_floor().is_none()
  }
}

/// Literal bounds for [`crate::store::HotelStore::get_hotel_rooms`].
///
/// Unlike [`RoomSearch`], zero is a real bound here: a `max_price` of zero
/// matches only free rooms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomBounds {
  pub min_price:    f64,
  pub max_price:    f64,
  pub min_capacity: i64,
}

// ─── Result rows ─────────────────────────────────────────────────────────────

/// One room joined with its hotel and (when present) its chain.
///
/// Rooms are grouped into hotel cards by the caller, so results are never
/// truncated server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomListing {
  /// `None` when the hotel has no chain or the chain row is missing.
  pub chain_name:    Option<String>,
  pub hotel_address: String,
  pub area:          String,
  pub star_rating:   i64,
  pub room_number:   i64,
  pub capacity:      i64,
  pub view_type:     String,
  pub extendability: bool,
  pub price:         f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_search_is_unconstrained() {
    assert!(RoomSearch::default().is_unconstrained());
  }

  #[test]
  fn zero_and_negative_numbers_mean_absent() {
    let search = RoomSearch {
      star_rating: 0,
      max_price: 0.0,
      min_price: -5.0,
      min_capacity: -1,
      ..RoomSearch::default()
    };
    assert!(search.star_rating_floor().is_none());
    assert!(search.price_ceiling().is_none());
    assert!(search.price_floor().is_none());
    assert!(search.capacity_floor().is_none());
    assert!(search.is_unconstrained());
  }

  #[test]
  fn chain_filter_keyed_on_first_entry() {
    let mut search = RoomSearch {
      chain_names: vec!["".into(), "Acme".into()],
      ..RoomSearch::default()
    };
    assert!(search.chain_filter().is_none());

    search.chain_names = vec!["Acme".into(), "".into()];
    assert_eq!(search.chain_filter().map(<[String]>::len), Some(2));
  }

  #[test]
  fn area_pattern_wraps_in_wildcards() {
    let search = RoomSearch { area: "Downtown".into(), ..RoomSearch::default() };
    assert_eq!(search.area_pattern().as_deref(), Some("%Downtown%"));
  }

  #[test]
  fn missing_fields_deserialise_to_defaults() {
    let search: RoomSearch =
      serde_json::from_str(r#"{"star_rating": 4}"#).unwrap();
    assert_eq!(search.star_rating_floor(), Some(4));
    assert!(search.chain_names.is_empty());
    assert!(search.price_ceiling().is_none());
  }
}

//! Handlers for rooms and room search.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/rooms` | All rooms |
//! | `GET`    | `/rooms/search` | See [`SearchParams`]; no parameters returns every room |
//! | `GET`    | `/hotels/:address/rooms` | Required `min_price`, `max_price`, `min_capacity` |
//! | `PUT`    | `/hotels/:address/rooms/:number` | Body: full [`HotelRoom`]; 404 if absent |
//! | `DELETE` | `/hotels/:address/rooms/:number` | Cascades to reservations; 404 if absent |
//! | `GET`    | `/hotels/:address/rooms/:number/reservations` | Check-in / check-out pairs |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
};
use hotel_core::{
  entity::HotelRoom,
  reservation::StayDates,
  search::{RoomBounds, RoomListing, RoomSearch},
  store::HotelStore,
};
use serde::Deserialize;

use crate::{error::ApiError, require_found};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /rooms`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<HotelRoom>>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let rooms = store.get_all_rooms().await.map_err(ApiError::store)?;
  Ok(Json(rooms))
}

// ─── Search ───────────────────────────────────────────────────────────────────

/// Query params for `GET /rooms/search`. Each maps to the [`RoomSearch`] field
/// of the same name; `chain_names` is a comma-separated string.
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  pub chain_names:  Option<String>,
  pub area:         Option<String>,
  pub star_rating:  Option<i64>,
  pub max_price:    Option<f64>,
  pub min_price:    Option<f64>,
  pub min_capacity: Option<i64>,
}

impl SearchParams {
  /// `None` when no parameter was given at all, so the store returns the
  /// unfiltered set.
  pub fn into_search(self) -> Option<RoomSearch> {
    if self.chain_names.is_none()
      && self.area.is_none()
      && self.star_rating.is_none()
      && self.max_price.is_none()
      && self.min_price.is_none()
      && self.min_capacity.is_none()
    {
      return None;
    }

    Some(RoomSearch {
      chain_names:  self
        .chain_names
        .map(|s| s.split(',').map(|t| t.trim().to_owned()).collect())
        .unwrap_or_default(),
      area:         self.area.unwrap_or_default(),
      star_rating:  self.star_rating.unwrap_or_default(),
      max_price:    self.max_price.unwrap_or_default(),
      min_price:    self.min_price.unwrap_or_default(),
      min_capacity: self.min_capacity.unwrap_or_default(),
    })
  }
}

/// `GET /rooms/search[?chain_names=a,b][&area=...][&star_rating=...][&max_price=...][&min_price=...][&min_capacity=...]`
pub async fn search<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<RoomListing>>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let rows = store
    .get_all_hotel_rooms(params.into_search())
    .await
    .map_err(ApiError::store)?;
  Ok(Json(rows))
}

/// `GET /hotels/:address/rooms?min_price=..&max_price=..&min_capacity=..`
pub async fn for_hotel<S>(
  State(store): State<Arc<S>>,
  Path(address): Path<String>,
  Query(bounds): Query<RoomBounds>,
) -> Result<Json<Vec<HotelRoom>>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let rooms = store
    .get_hotel_rooms(address, bounds)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(rooms))
}

// ─── Single room ──────────────────────────────────────────────────────────────

/// `PUT /hotels/:address/rooms/:number`: overwrites every mutable field.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path((address, number)): Path<(String, i64)>,
  Json(room): Json<HotelRoom>,
) -> Result<Json<HotelRoom>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if room.hotel_address != address || room.room_number != number {
    return Err(ApiError::BadRequest(format!(
      "body identifies room {:?} #{}, path identifies {address:?} #{number}",
      room.hotel_address, room.room_number
    )));
  }

  let found = store
    .update_hotel_room(room.clone())
    .await
    .map_err(ApiError::store)?;
  require_found(found, Json(room), || format!("room {address} #{number} not found"))
}

/// `DELETE /hotels/:address/rooms/:number`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path((address, number)): Path<(String, i64)>,
) -> Result<StatusCode, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let found = store
    .delete_hotel_room(address.clone(), number)
    .await
    .map_err(ApiError::store)?;
  require_found(found, StatusCode::NO_CONTENT, || {
    format!("room {address} #{number} not found")
  })
}

/// `GET /hotels/:address/rooms/:number/reservations`
pub async fn reservations<S>(
  State(store): State<Arc<S>>,
  Path((address, number)): Path<(String, i64)>,
) -> Result<Json<Vec<StayDates>>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let stays = store
    .get_reservations_for_room(address, number)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(stays))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_params_means_no_search() {
    assert_eq!(SearchParams::default().into_search(), None);
  }

  #[test]
  fn comma_separated_chains_are_split_and_trimmed() {
    let params = SearchParams {
      chain_names: Some("Acme, Globex".into()),
      ..SearchParams::default()
    };
    let search = params.into_search().unwrap();
    assert_eq!(search.chain_names, vec!["Acme", "Globex"]);
    assert_eq!(search.star_rating, 0);
  }

  #[test]
  fn any_param_yields_a_search() {
    let params = SearchParams { min_capacity: Some(0), ..SearchParams::default() };
    let search = params.into_search().unwrap();
    assert!(search.is_unconstrained());
  }
}

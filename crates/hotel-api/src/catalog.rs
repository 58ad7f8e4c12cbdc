//! Handlers for chains, hotels, and staff.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/chains` | All chains |
//! | `GET`    | `/employees` | All employees |
//! | `GET`    | `/hotels` | All hotels |
//! | `PUT`    | `/hotels/:address` | Body: full [`Hotel`]; 404 if absent |
//! | `DELETE` | `/hotels/:address` | Removes rooms, reservations, staff; 404 if absent |
//! | `GET`    | `/hotels/:address/capacity` | `{"capacity": n \| null}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use hotel_core::{
  entity::{Employee, Hotel, HotelChain},
  store::HotelStore,
};
use serde::Serialize;

use crate::{error::ApiError, require_found};

/// `GET /chains`
pub async fn chains<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<HotelChain>>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let chains = store.get_hotel_chains().await.map_err(ApiError::store)?;
  Ok(Json(chains))
}

/// `GET /employees`
pub async fn employees<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let employees = store.get_all_employees().await.map_err(ApiError::store)?;
  Ok(Json(employees))
}

// ─── Hotels ───────────────────────────────────────────────────────────────────

/// `GET /hotels`
pub async fn hotels<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Hotel>>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let hotels = store.get_all_hotels().await.map_err(ApiError::store)?;
  Ok(Json(hotels))
}

/// `PUT /hotels/:address`: overwrites every mutable field.
pub async fn update_hotel<S>(
  State(store): State<Arc<S>>,
  Path(address): Path<String>,
  Json(hotel): Json<Hotel>,
) -> Result<Json<Hotel>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if hotel.hotel_address != address {
    return Err(ApiError::BadRequest(format!(
      "body hotel_address {:?} does not match path {address:?}",
      hotel.hotel_address
    )));
  }

  let found = store
    .update_hotel(hotel.clone())
    .await
    .map_err(ApiError::store)?;
  require_found(found, Json(hotel), || format!("hotel {address} not found"))
}

/// `DELETE /hotels/:address`
pub async fn delete_hotel<S>(
  State(store): State<Arc<S>>,
  Path(address): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let found = store
    .delete_hotel(address.clone())
    .await
    .map_err(ApiError::store)?;
  if found {
    tracing::info!(%address, "hotel deleted");
  }
  require_found(found, StatusCode::NO_CONTENT, || format!("hotel {address} not found"))
}

#[derive(Debug, Serialize)]
pub struct Capacity {
  pub capacity: Option<i64>,
}

/// `GET /hotels/:address/capacity`
pub async fn capacity<S>(
  State(store): State<Arc<S>>,
  Path(address): Path<String>,
) -> Result<Json<Capacity>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let capacity = store
    .get_total_capacity(address)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(Capacity { capacity }))
}

//! Handlers for reservations and the booking archive.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/reservations` | Live reservations |
//! | `POST` | `/reservations` | Body: [`Reservation`]; 201 if written, 200 if already booked |
//! | `GET`  | `/booking-history` | Every reservation ever made |
//! | `POST` | `/booking-history` | Body: [`Reservation`]; append unless already archived |
//!
//! No overlap check is made: a room can be booked for overlapping nights as
//! long as the check-in dates differ.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  response::IntoResponse,
};
use hotel_core::{reservation::Reservation, store::HotelStore};

use crate::{error::ApiError, insert_response};

/// `GET /reservations`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Reservation>>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let reservations = store.get_all_reservations().await.map_err(ApiError::store)?;
  Ok(Json(reservations))
}

/// `POST /reservations`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(reservation): Json<Reservation>,
) -> Result<impl IntoResponse, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let outcome = store
    .insert_reservation(reservation)
    .await
    .map_err(ApiError::store)?;
  Ok(insert_response(outcome))
}

/// `GET /booking-history`
pub async fn history<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Reservation>>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let history = store.get_booking_history().await.map_err(ApiError::store)?;
  Ok(Json(history))
}

/// `POST /booking-history`
pub async fn archive<S>(
  State(store): State<Arc<S>>,
  Json(booking): Json<Reservation>,
) -> Result<impl IntoResponse, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let outcome = store
    .insert_booking_archive(booking)
    .await
    .map_err(ApiError::store)?;
  Ok(insert_response(outcome))
}

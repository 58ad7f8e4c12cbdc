//! JSON REST API for the hotel reservation store.
//!
//! Exposes an axum [`Router`] backed by any [`hotel_core::store::HotelStore`].
//! Rendering, sessions, and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", hotel_api::api_router(store.clone()))
//! ```

pub mod catalog;
pub mod customers;
pub mod error;
pub mod reservations;
pub mod rooms;

use std::sync::Arc;

use axum::{
  Json,
  Router,
  http::StatusCode,
  routing::{get, put},
};
use hotel_core::{reservation::InsertOutcome, store::HotelStore};
use serde_json::json;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: HotelStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Chains, hotels, staff
    .route("/chains", get(catalog::chains::<S>))
    .route("/employees", get(catalog::employees::<S>))
    .route("/hotels", get(catalog::hotels::<S>))
    .route(
      "/hotels/{address}",
      put(catalog::update_hotel::<S>).delete(catalog::delete_hotel::<S>),
    )
    .route("/hotels/{address}/capacity", get(catalog::capacity::<S>))
    // Rooms
    .route("/rooms", get(rooms::list::<S>))
    .route("/rooms/search", get(rooms::search::<S>))
    .route("/hotels/{address}/rooms", get(rooms::for_hotel::<S>))
    .route(
      "/hotels/{address}/rooms/{number}",
      put(rooms::update::<S>).delete(rooms::delete::<S>),
    )
    .route(
      "/hotels/{address}/rooms/{number}/reservations",
      get(rooms::reservations::<S>),
    )
    // Customers
    .route("/customers", get(customers::list::<S>).post(customers::create::<S>))
    .route(
      "/customers/{id}",
      put(customers::update::<S>).delete(customers::delete::<S>),
    )
    // Bookings
    .route(
      "/reservations",
      get(reservations::list::<S>).post(reservations::create::<S>),
    )
    .route(
      "/booking-history",
      get(reservations::history::<S>).post(reservations::archive::<S>),
    )
    .with_state(store)
}

/// `201` when the row was written, `200` when it was already there; the body
/// carries the outcome either way.
pub(crate) fn insert_response(outcome: InsertOutcome) -> (StatusCode, Json<serde_json::Value>) {
  let status = match outcome {
    InsertOutcome::Inserted => StatusCode::CREATED,
    InsertOutcome::AlreadyExists => StatusCode::OK,
  };
  (status, Json(json!({ "outcome": outcome })))
}

/// Map a gated mutation's `false` to a 404 and `true` to `ok`.
pub(crate) fn require_found<T>(found: bool, ok: T, what: impl FnOnce() -> String) -> Result<T, ApiError> {
  if found { Ok(ok) } else { Err(ApiError::NotFound(what())) }
}

#[cfg(test)]
mod tests;

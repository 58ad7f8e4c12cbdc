//! Handlers for `/customers` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/customers` | All customers |
//! | `POST`   | `/customers` | Body: [`Customer`]; 201 if written, 200 if the id exists |
//! | `PUT`    | `/customers/:id` | Body: `{"full_name":..,"address":..}`; 404 if absent |
//! | `DELETE` | `/customers/:id` | Cascades to reservations; 404 if absent |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use hotel_core::{entity::Customer, store::HotelStore};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, insert_response, require_found};

/// `GET /customers`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Customer>>, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let customers = store.get_all_customers().await.map_err(ApiError::store)?;
  Ok(Json(customers))
}

/// `POST /customers`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(customer): Json<Customer>,
) -> Result<impl IntoResponse, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let outcome = store
    .insert_customer(customer)
    .await
    .map_err(ApiError::store)?;
  Ok(insert_response(outcome))
}

/// JSON body accepted by `PUT /customers/:id`. Both fields are replaced.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateBody {
  pub full_name: String,
  pub address:   String,
}

/// `PUT /customers/:id`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<UpdateBody>,
) -> Result<StatusCode, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let found = store
    .update_customer(id, body.full_name, body.address)
    .await
    .map_err(ApiError::store)?;
  require_found(found, StatusCode::NO_CONTENT, || format!("customer {id} not found"))
}

/// `DELETE /customers/:id`
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: HotelStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let found = store.delete_customer(id).await.map_err(ApiError::store)?;
  require_found(found, StatusCode::NO_CONTENT, || format!("customer {id} not found"))
}

//! Router tests against an in-memory seeded store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use hotel_core::{
  entity::Customer,
  reservation::Reservation,
  search::RoomListing,
  seed,
  store::HotelStore,
};
use hotel_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

async fn seeded() -> (Router, Arc<SqliteStore>) {
  let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
  seed::load(store.as_ref()).await.unwrap();
  (crate::api_router(store.clone()), store)
}

async fn send(
  app:    Router,
  method: &str,
  uri:    &str,
  body:   Option<Value>,
) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(json) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(json.to_string())
    }
    None => Body::empty(),
  };
  let resp = app.oneshot(builder.body(body).unwrap()).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

fn encode(address: &str) -> String {
  address.replace(' ', "%20").replace(',', "%2C")
}

// ── Search ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_without_params_returns_every_room() {
  let (app, _) = seeded().await;
  let (status, body) = send(app, "GET", "/rooms/search", None).await;

  assert_eq!(status, StatusCode::OK);
  let rows: Vec<RoomListing> = serde_json::from_value(body).unwrap();
  assert_eq!(rows.len(), seed::hotel_rooms().len());
}

#[tokio::test]
async fn search_filters_by_chain_and_capacity() {
  let (app, _) = seeded().await;
  let (status, body) = send(
    app,
    "GET",
    "/rooms/search?chain_names=Maple%20Suites&min_capacity=3&star_rating=0",
    None,
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  let rows: Vec<RoomListing> = serde_json::from_value(body).unwrap();
  assert!(!rows.is_empty());
  assert!(rows.iter().all(|r| {
    r.chain_name.as_deref() == Some("Maple Suites") && r.capacity >= 3
  }));
}

// ── Customers ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_customer_reports_outcome() {
  let (app, store) = seeded().await;
  let customer = json!({
    "customer_id": 2001,
    "full_name": "Noor Haddad",
    "address": "4 Spruce Court, Calgary, AB",
    "system_registration_date": "2024-10-01",
  });

  let (status, body) =
    send(app.clone(), "POST", "/customers", Some(customer.clone())).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body, json!({ "outcome": "inserted" }));

  let (status, body) = send(app, "POST", "/customers", Some(customer)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "outcome": "already_exists" }));

  let customers: Vec<Customer> = store.get_all_customers().await.unwrap();
  assert_eq!(customers.len(), seed::customers().len() + 1);
}

#[tokio::test]
async fn update_and_delete_missing_customer_is_404() {
  let (app, _) = seeded().await;
  let (status, _) = send(
    app.clone(),
    "PUT",
    "/customers/9999",
    Some(json!({ "full_name": "X", "address": "Y" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, body) = send(app, "DELETE", "/customers/9999", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("9999"));
}

#[tokio::test]
async fn deleting_customer_keeps_history() {
  let (app, store) = seeded().await;
  let history_before = store.get_booking_history().await.unwrap();

  let (status, _) = send(app, "DELETE", "/customers/1001", None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let live: Vec<Reservation> = store.get_all_reservations().await.unwrap();
  assert!(live.iter().all(|r| r.customer_id != 1001));
  assert_eq!(store.get_booking_history().await.unwrap(), history_before);
}

// ── Rooms ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn room_update_rejects_mismatched_body() {
  let (app, _) = seeded().await;
  let room = seed::hotel_rooms().remove(0);
  let uri = format!("/hotels/{}/rooms/{}", encode(&room.hotel_address), room.room_number + 1);

  let (status, _) =
    send(app, "PUT", &uri, Some(serde_json::to_value(&room).unwrap())).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn room_update_and_capacity() {
  let (app, store) = seeded().await;
  let mut room = seed::hotel_rooms().remove(0);
  let address = room.hotel_address.clone();
  let before = store.get_total_capacity(address.clone()).await.unwrap().unwrap();

  room.capacity += 2;
  let uri = format!("/hotels/{}/rooms/{}", encode(&address), room.room_number);
  let (status, _) =
    send(app.clone(), "PUT", &uri, Some(serde_json::to_value(&room).unwrap())).await;
  assert_eq!(status, StatusCode::OK);

  let (status, body) =
    send(app, "GET", &format!("/hotels/{}/capacity", encode(&address)), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "capacity": before + 2 }));
}

#[tokio::test]
async fn deleting_missing_room_is_404() {
  let (app, _) = seeded().await;
  let (status, _) = send(app, "DELETE", "/hotels/nowhere/rooms/1", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Reservations ────────────────────────────────────────────────────────────

#[tokio::test]
async fn booking_a_room_archives_it() {
  let (app, _) = seeded().await;
  let room = seed::hotel_rooms().remove(0);
  let booking = Reservation {
    customer_id:    1002,
    hotel_address:  room.hotel_address.clone(),
    room_number:    room.room_number,
    check_in_date:  chrono::NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
    check_out_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
  };

  let (status, _) = send(
    app.clone(),
    "POST",
    "/reservations",
    Some(serde_json::to_value(&booking).unwrap()),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);

  let (_, body) = send(app.clone(), "GET", "/booking-history", None).await;
  let history: Vec<Reservation> = serde_json::from_value(body).unwrap();
  assert!(history.contains(&booking));

  let uri = format!(
    "/hotels/{}/rooms/{}/reservations",
    encode(&room.hotel_address),
    room.room_number
  );
  let (status, body) = send(app, "GET", &uri, None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body,
    json!([{ "check_in_date": "2025-01-10", "check_out_date": "2025-01-12" }])
  );
}

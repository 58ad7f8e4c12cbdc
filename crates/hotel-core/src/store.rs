//! The `HotelStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `hotel-store-sqlite`).
//! Higher layers (`hotel-api`, the seed loader) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  entity::{Customer, Employee, Hotel, HotelChain, HotelRoom},
  reservation::{InsertOutcome, Reservation, StayDates},
  search::{RoomBounds, RoomListing, RoomSearch},
};

/// Abstraction over a hotel reservation store backend.
///
/// Inserts are idempotent on the entity key and report an [`InsertOutcome`].
/// Updates and deletes are gated on the key existing and report `false`
/// without touching storage when it does not. Storage errors are returned
/// untranslated.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait HotelStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Idempotent inserts ────────────────────────────────────────────────

  fn insert_hotel_chain(
    &self,
    chain: HotelChain,
  ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send + '_;

  fn insert_hotel(
    &self,
    hotel: Hotel,
  ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send + '_;

  /// Insert an employee. Fails with a validation error if the employee names
  /// itself as supervisor.
  fn insert_employee(
    &self,
    employee: Employee,
  ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send + '_;

  fn insert_hotel_room(
    &self,
    room: HotelRoom,
  ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send + '_;

  fn insert_customer(
    &self,
    customer: Customer,
  ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send + '_;

  /// Insert a reservation. A successful insert is mirrored into the booking
  /// archive by the store itself.
  fn insert_reservation(
    &self,
    reservation: Reservation,
  ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send + '_;

  /// Append a booking to the archive directly, unless an entry with the same
  /// customer, room, and check-in date is already there.
  fn insert_booking_archive(
    &self,
    booking: Reservation,
  ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  fn get_hotel_chains(
    &self,
  ) -> impl Future<Output = Result<Vec<HotelChain>, Self::Error>> + Send + '_;

  /// Room search. `None` returns every room joined with its hotel and chain,
  /// unfiltered and unpaginated.
  fn get_all_hotel_rooms(
    &self,
    options: Option<RoomSearch>,
  ) -> impl Future<Output = Result<Vec<RoomListing>, Self::Error>> + Send + '_;

  /// Rooms of one hotel within literal price and capacity bounds.
  fn get_hotel_rooms(
    &self,
    hotel_address: String,
    bounds: RoomBounds,
  ) -> impl Future<Output = Result<Vec<HotelRoom>, Self::Error>> + Send + '_;

  fn get_reservations_for_room(
    &self,
    hotel_address: String,
    room_number: i64,
  ) -> impl Future<Output = Result<Vec<StayDates>, Self::Error>> + Send + '_;

  /// Sum of room capacities for a hotel; `None` if it has no rooms.
  fn get_total_capacity(
    &self,
    hotel_address: String,
  ) -> impl Future<Output = Result<Option<i64>, Self::Error>> + Send + '_;

  fn get_all_rooms(
    &self,
  ) -> impl Future<Output = Result<Vec<HotelRoom>, Self::Error>> + Send + '_;

  fn get_all_hotels(
    &self,
  ) -> impl Future<Output = Result<Vec<Hotel>, Self::Error>> + Send + '_;

  fn get_all_customers(
    &self,
  ) -> impl Future<Output = Result<Vec<Customer>, Self::Error>> + Send + '_;

  fn get_all_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  fn get_all_reservations(
    &self,
  ) -> impl Future<Output = Result<Vec<Reservation>, Self::Error>> + Send + '_;

  /// Every reservation ever inserted, including ones since deleted.
  fn get_booking_history(
    &self,
  ) -> impl Future<Output = Result<Vec<Reservation>, Self::Error>> + Send + '_;

  // ── Existence-gated mutations ─────────────────────────────────────────

  /// Overwrite a customer's name and address.
  fn update_customer(
    &self,
    customer_id: i64,
    full_name: String,
    address: String,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of the room identified by
  /// `(room.hotel_address, room.room_number)`.
  fn update_hotel_room(
    &self,
    room: HotelRoom,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Overwrite every mutable field of the hotel at `hotel.hotel_address`.
  fn update_hotel(
    &self,
    hotel: Hotel,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete a customer and, by cascade, their reservations. The archive is
  /// left untouched.
  fn delete_customer(
    &self,
    customer_id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete a room and, by cascade, its reservations. The archive is left
  /// untouched.
  fn delete_hotel_room(
    &self,
    hotel_address: String,
    room_number: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Delete a hotel together with its rooms, their reservations, and its
  /// employees.
  fn delete_hotel(
    &self,
    hotel_address: String,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}

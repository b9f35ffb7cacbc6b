//! Booking service seam
//!
//! Controllers talk to the service through this trait so tests can
//! drive them with scripted fakes instead of a live server.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{Booking, BookingPayload};

use crate::error::ClientResult;

/// The five REST operations of the external booking service
#[async_trait]
pub trait BookingService: Send + Sync {
    /// `GET /bookings`
    async fn list_bookings(&self) -> ClientResult<Vec<Booking>>;

    /// `POST /bookings` — server assigns the id
    async fn create_booking(&self, payload: &BookingPayload) -> ClientResult<Booking>;

    /// `PUT /bookings/{id}`
    async fn update_booking(&self, id: &str, payload: &BookingPayload) -> ClientResult<Booking>;

    /// `DELETE /bookings/{id}`
    async fn delete_booking(&self, id: &str) -> ClientResult<()>;

    /// `GET /available-slots?date=YYYY-MM-DD` — raw `HH:mm` strings,
    /// server order preserved
    async fn available_slots(&self, date: NaiveDate) -> ClientResult<Vec<String>>;
}

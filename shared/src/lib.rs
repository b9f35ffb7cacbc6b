//! Shared types for the booking client
//!
//! Wire models for the booking service REST API and the date/time
//! conversion utilities used across the workspace.

pub mod datetime;
pub mod models;

// Re-exports
pub use models::{Booking, BookingPayload, SlotQueryResponse};
pub use serde::{Deserialize, Serialize};

//! Wire models for the booking service API

mod booking;

pub use booking::{Booking, BookingPayload, SlotQueryResponse};

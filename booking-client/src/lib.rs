//! Booking Client - client library for the table-booking service
//!
//! Owns the booking form and list state machines and the HTTP transport
//! to the external booking service. A UI embeds the controllers and
//! renders their read-only views; all persistence and slot computation
//! stays on the server.

pub mod config;
pub mod confirm;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod service;
pub mod slots;
pub mod validate;

pub use config::ClientConfig;
pub use confirm::BookingSummary;
pub use error::{ClientError, ClientResult};
pub use form::{BookingDraft, BookingForm, FormState, SlotRequest, SubmitError};
pub use http::HttpClient;
pub use list::{BookingList, Selection};
pub use service::BookingService;
pub use slots::Slots;
pub use validate::{Field, ValidationErrors};

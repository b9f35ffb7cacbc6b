//! Confirmation presenter
//!
//! Formats a completed booking for the success dialog. Pure; takes the
//! payload that was actually sent, so what the user confirms is what
//! the service stored.

use chrono::{NaiveDate, NaiveTime};
use shared::{datetime, BookingPayload};

/// Summary of a successfully submitted booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub name: String,
    pub contact: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: u32,
}

impl BookingSummary {
    pub fn from_payload(payload: &BookingPayload) -> Self {
        Self {
            name: payload.name.clone(),
            contact: payload.contact.clone(),
            date: payload.date,
            time: payload.time,
            guests: payload.guests,
        }
    }

    /// `01-05-2024`
    pub fn display_date(&self) -> String {
        datetime::display_date(self.date)
    }

    /// `06:00 PM`
    pub fn display_time(&self) -> String {
        datetime::display_time(self.time)
    }

    /// `2 Guests`
    pub fn guests_line(&self) -> String {
        format!("{} Guests", self.guests)
    }

    /// All summary lines in display order: name, contact, date, time,
    /// guests.
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.contact.clone(),
            self.display_date(),
            self.display_time(),
            self.guests_line(),
        ]
    }
}

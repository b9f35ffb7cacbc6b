//! Booking Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::datetime::transport_time_serde;

/// Persisted booking entity
///
/// The id is server-assigned and opaque; a record coming back from the
/// service always carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub date: NaiveDate,
    #[serde(with = "transport_time_serde")]
    pub time: NaiveTime,
    pub guests: u32,
}

/// Create/update booking payload (no id; the URL or the server supplies it)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub name: String,
    pub contact: String,
    pub date: NaiveDate,
    #[serde(with = "transport_time_serde")]
    pub time: NaiveTime,
    pub guests: u32,
}

/// Response body of `GET /available-slots?date=YYYY-MM-DD`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotQueryResponse {
    #[serde(rename = "availableSlots", default)]
    pub available_slots: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_wire_format() {
        let json = r#"{
            "id": "abc123",
            "name": "Jane Doe",
            "contact": "1234567890",
            "date": "2024-05-01",
            "time": "18:00",
            "guests": 2
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, "abc123");
        assert_eq!(booking.date.to_string(), "2024-05-01");
        assert_eq!(crate::datetime::transport_time(booking.time), "18:00");
        assert_eq!(booking.guests, 2);

        let out = serde_json::to_value(&booking).unwrap();
        assert_eq!(out["time"], "18:00");
        assert_eq!(out["date"], "2024-05-01");
    }

    #[test]
    fn test_payload_has_no_id() {
        let payload = BookingPayload {
            name: "Jane Doe".into(),
            contact: "1234567890".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            guests: 2,
        };
        let out = serde_json::to_value(&payload).unwrap();
        assert!(out.get("id").is_none());
        assert_eq!(out["time"], "18:00");
    }

    #[test]
    fn test_slot_query_response_defaults() {
        let resp: SlotQueryResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.available_slots.is_empty());

        let resp: SlotQueryResponse =
            serde_json::from_str(r#"{"availableSlots":["10:00","18:00"]}"#).unwrap();
        assert_eq!(resp.available_slots, vec!["10:00", "18:00"]);
    }
}

//! Date/time conversion utilities
//!
//! The single home for display <-> transport format logic. The service
//! speaks `YYYY-MM-DD` dates and 24-hour `HH:mm` times; humans see
//! `DD-MM-YYYY` and 12-hour `hh:mm AM/PM`.

use chrono::{NaiveDate, NaiveTime};

/// Transport date format (`2024-05-01`).
pub const TRANSPORT_DATE: &str = "%Y-%m-%d";
/// Transport time format (`18:00`).
pub const TRANSPORT_TIME: &str = "%H:%M";
/// Display date format (`01-05-2024`).
pub const DISPLAY_DATE: &str = "%d-%m-%Y";
/// Display time format (`06:00 PM`).
pub const DISPLAY_TIME: &str = "%I:%M %p";

/// Format a time for display.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use shared::datetime::display_time;
///
/// let t = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
/// assert_eq!(display_time(t), "06:00 PM");
/// ```
pub fn display_time(time: NaiveTime) -> String {
    time.format(DISPLAY_TIME).to_string()
}

/// Parse a display-format time (`06:00 PM`) back to a time-of-day.
pub fn parse_display_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, DISPLAY_TIME).ok()
}

/// Format a time for transport (`18:00`).
pub fn transport_time(time: NaiveTime) -> String {
    time.format(TRANSPORT_TIME).to_string()
}

/// Parse a transport-format time; rejects anything that is not `HH:mm`.
pub fn parse_transport_time(value: &str) -> Option<NaiveTime> {
    // chrono accepts unpadded fields; the wire format is exactly five chars
    if value.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(value, TRANSPORT_TIME).ok()
}

/// Format a date for display (`01-05-2024`).
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE).to_string()
}

/// Format a date for transport (`2024-05-01`).
pub fn transport_date(date: NaiveDate) -> String {
    date.format(TRANSPORT_DATE).to_string()
}

/// Parse a transport-format date.
pub fn parse_transport_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, TRANSPORT_DATE).ok()
}

/// Serde helper for `HH:mm` times on the wire.
///
/// Chrono's default `NaiveTime` representation carries seconds; the
/// booking service does not.
pub mod transport_time_serde {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&super::transport_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(de)?;
        super::parse_transport_time(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid HH:mm time: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_display_time_round_trip() {
        assert_eq!(display_time(t(18, 0)), "06:00 PM");
        assert_eq!(parse_display_time("06:00 PM"), Some(t(18, 0)));

        for time in [t(10, 0), t(12, 0), t(0, 30), t(20, 0), t(23, 59)] {
            let back = parse_display_time(&display_time(time));
            assert_eq!(back, Some(time), "failed for {}", time);
        }
    }

    #[test]
    fn test_transport_time() {
        assert_eq!(transport_time(t(18, 0)), "18:00");
        assert_eq!(parse_transport_time("18:00"), Some(t(18, 0)));
        assert_eq!(parse_transport_time("9:5"), None);
        assert_eq!(parse_transport_time("25:00"), None);
        assert_eq!(parse_transport_time("lunch"), None);
    }

    #[test]
    fn test_dates() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(display_date(d), "01-05-2024");
        assert_eq!(transport_date(d), "2024-05-01");
        assert_eq!(parse_transport_date("2024-05-01"), Some(d));
        assert_eq!(parse_transport_date("01-05-2024"), None);
    }
}

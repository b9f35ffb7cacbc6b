//! Slot availability client
//!
//! Fetches the bookable time slots for a date and normalizes the
//! response. A failed or malformed fetch degrades to `Unavailable`
//! rather than an error; the UI then offers the full-day ladder while
//! the real availability stays unknown.

use chrono::{NaiveDate, NaiveTime};
use shared::datetime;

use crate::service::BookingService;

/// Known slot availability for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slots {
    /// Server answered; the list may legitimately be empty
    Fetched(Vec<NaiveTime>),
    /// Fetch failed or the response was unusable
    Unavailable,
}

impl Slots {
    /// The list a UI should display: fetched slots, or the fallback
    /// ladder when availability is unknown.
    pub fn offered(&self) -> Vec<NaiveTime> {
        match self {
            Slots::Fetched(slots) => slots.clone(),
            Slots::Unavailable => fallback_ladder(),
        }
    }

    /// Whether `time` is currently offered.
    pub fn offers(&self, time: NaiveTime) -> bool {
        self.offered().contains(&time)
    }
}

/// Full-day hourly ladder, 10:00 through 20:00 inclusive.
pub fn fallback_ladder() -> Vec<NaiveTime> {
    (10..=20)
        .map(|h| NaiveTime::from_hms_opt(h, 0, 0).expect("hour in range"))
        .collect()
}

/// Fetch the available slots for `date`.
///
/// Entries that do not parse as `HH:mm` times are dropped; server order
/// is preserved for the rest.
pub async fn fetch_slots(service: &impl BookingService, date: NaiveDate) -> Slots {
    match service.available_slots(date).await {
        Ok(raw) => {
            let slots: Vec<NaiveTime> = raw
                .iter()
                .filter_map(|s| datetime::parse_transport_time(s))
                .collect();
            if slots.len() < raw.len() {
                tracing::warn!(
                    date = %date,
                    dropped = raw.len() - slots.len(),
                    "discarded malformed slot entries"
                );
            }
            Slots::Fetched(slots)
        }
        Err(err) => {
            tracing::warn!(date = %date, error = %err, "slot fetch failed");
            Slots::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_fallback_ladder() {
        let ladder = fallback_ladder();
        assert_eq!(ladder.len(), 11);
        assert_eq!(ladder.first(), Some(&t(10, 0)));
        assert_eq!(ladder.last(), Some(&t(20, 0)));
        assert!(ladder.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_unavailable_offers_ladder() {
        assert_eq!(Slots::Unavailable.offered(), fallback_ladder());
        assert!(Slots::Unavailable.offers(t(13, 0)));
    }

    #[test]
    fn test_fetched_empty_stays_empty() {
        // a confirmed zero-slot day is not the same as a failed fetch
        let slots = Slots::Fetched(vec![]);
        assert!(slots.offered().is_empty());
        assert!(!slots.offers(t(13, 0)));
    }

    #[test]
    fn test_fetched_preserves_order() {
        let slots = Slots::Fetched(vec![t(19, 0), t(10, 30)]);
        assert_eq!(slots.offered(), vec![t(19, 0), t(10, 30)]);
        assert!(slots.offers(t(10, 30)));
        assert!(!slots.offers(t(12, 0)));
    }
}

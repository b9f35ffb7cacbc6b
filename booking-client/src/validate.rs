//! Field validation for the booking form
//!
//! Pure rules; errors are human-readable messages keyed by field. The
//! date and time fields carry no format rule here: the form only
//! requires that a time has been selected at all.

use std::collections::BTreeMap;

use crate::form::BookingDraft;

/// Form fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Contact,
    Guests,
    Time,
}

/// Field -> error message; empty means the draft is submittable
pub type ValidationErrors = BTreeMap<Field, String>;

/// Validate the guest name: letters and spaces only, non-empty.
pub fn validate_name(value: &str) -> Option<String> {
    let ok = !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ');
    (!ok).then(|| "Name must contain only alphabets and spaces.".to_string())
}

/// Validate the contact number: exactly 10 ASCII digits.
pub fn validate_contact(value: &str) -> Option<String> {
    let ok = value.len() == 10 && value.chars().all(|c| c.is_ascii_digit());
    (!ok).then(|| "Contact must be a 10-digit number.".to_string())
}

/// Validate the party size: at least one guest.
pub fn validate_guests(value: u32) -> Option<String> {
    (value == 0).then(|| "Guests must be a positive number.".to_string())
}

/// Run every rule over a draft and aggregate the failures.
pub fn validate_draft(draft: &BookingDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if let Some(msg) = validate_name(&draft.name) {
        errors.insert(Field::Name, msg);
    }
    if let Some(msg) = validate_contact(&draft.contact) {
        errors.insert(Field::Contact, msg);
    }
    if let Some(msg) = validate_guests(draft.guests) {
        errors.insert(Field::Guests, msg);
    }
    if draft.time.is_none() {
        errors.insert(Field::Time, "Please select a time slot.".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rule() {
        assert!(validate_name("Jane Doe").is_none());
        assert!(validate_name("jane").is_none());
        assert!(validate_name("").is_some());
        assert!(validate_name("Jane2").is_some());
        assert!(validate_name("Jane_Doe").is_some());
        assert!(validate_name("José").is_some()); // ASCII letters only
    }

    #[test]
    fn test_contact_rule() {
        assert!(validate_contact("9876543210").is_none());
        assert!(validate_contact("98765").is_some());
        assert!(validate_contact("98765432101").is_some());
        assert!(validate_contact("987654321x").is_some());
        assert!(validate_contact("").is_some());
    }

    #[test]
    fn test_guests_rule() {
        assert!(validate_guests(0).is_some());
        assert!(validate_guests(1).is_none());
        assert!(validate_guests(12).is_none());
    }

    #[test]
    fn test_draft_aggregation() {
        let mut draft = BookingDraft::default();
        draft.name = "Jane Doe".into();
        draft.contact = "1234567890".into();
        draft.time = chrono::NaiveTime::from_hms_opt(18, 0, 0);

        assert!(validate_draft(&draft).is_empty());

        draft.contact = "123".into();
        draft.time = None;
        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key(&Field::Contact));
        assert!(errors.contains_key(&Field::Time));
    }
}

//! Booking form controller
//!
//! Owns the draft for one open dialog: field state, validation errors,
//! and the available slot set for the currently selected date. Slot
//! fetches are asynchronous, so every fetch carries the date it was
//! issued for and late responses for a superseded date are discarded
//! (last write wins by date, not by completion order).

use chrono::{Local, NaiveDate, NaiveTime};
use shared::{Booking, BookingPayload};
use thiserror::Error;

use crate::confirm::BookingSummary;
use crate::error::ClientError;
use crate::service::BookingService;
use crate::slots::{self, Slots};
use crate::validate::{validate_draft, Field, ValidationErrors};

/// Dialog state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Closed,
    OpenCreate,
    OpenEdit { id: String },
}

/// In-progress, unsaved form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub contact: String,
    pub guests: u32,
    pub date: NaiveDate,
    /// Unselected until the user picks a slot
    pub time: Option<NaiveTime>,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            contact: String::new(),
            guests: 1,
            date: Local::now().date_naive(),
            time: None,
        }
    }
}

/// Token tying a slot fetch to the date it was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRequest {
    date: NaiveDate,
}

impl SlotRequest {
    /// The date to query the service for
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Submission failure
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Submit on a closed form (e.g. a second click after success)
    #[error("form is not open")]
    NotOpen,

    /// Per-field validation failed; no request was issued
    #[error("validation failed")]
    Invalid(ValidationErrors),

    /// The service rejected the booking or was unreachable
    #[error(transparent)]
    Service(#[from] ClientError),
}

/// Booking form state machine
#[derive(Debug)]
pub struct BookingForm {
    state: FormState,
    draft: BookingDraft,
    errors: ValidationErrors,
    slots: Slots,
    slot_target: Option<NaiveDate>,
    /// Edit mode: the booking's original time, re-selected once slots
    /// for its date arrive (if still offered)
    remembered_time: Option<NaiveTime>,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            draft: BookingDraft::default(),
            errors: ValidationErrors::new(),
            slots: Slots::Unavailable,
            slot_target: None,
            remembered_time: None,
        }
    }

    // ── Read-only views ─────────────────────────────────────────────

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// Slots a UI should offer for the current date
    pub fn offered_slots(&self) -> Vec<NaiveTime> {
        self.slots.offered()
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Open an empty form for a new booking: today's date, one guest.
    pub fn open_create(&mut self) -> SlotRequest {
        self.reset();
        self.state = FormState::OpenCreate;
        self.retarget_slots(self.draft.date)
    }

    /// Open pre-filled from an existing booking. The time stays
    /// unselected until slots for the booking's date arrive; it is
    /// then re-selected if the service still offers it.
    pub fn open_edit(&mut self, booking: &Booking) -> SlotRequest {
        self.reset();
        self.state = FormState::OpenEdit {
            id: booking.id.clone(),
        };
        self.draft = BookingDraft {
            name: booking.name.clone(),
            contact: booking.contact.clone(),
            guests: booking.guests,
            date: booking.date,
            time: None,
        };
        self.remembered_time = Some(booking.time);
        self.retarget_slots(booking.date)
    }

    /// Discard the draft and close; no network call.
    pub fn cancel(&mut self) {
        tracing::debug!("form cancelled");
        self.reset();
    }

    fn reset(&mut self) {
        self.state = FormState::Closed;
        self.draft = BookingDraft::default();
        self.errors.clear();
        self.slots = Slots::Unavailable;
        self.slot_target = None;
        self.remembered_time = None;
    }

    // ── Field changes ───────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) {
        self.draft.contact = contact.into();
    }

    pub fn set_guests(&mut self, guests: u32) {
        self.draft.guests = guests;
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.draft.time = Some(time);
        self.remembered_time = None;
    }

    /// Change the selected date. The slot set is replaced wholesale:
    /// the previous selection is cleared and a new fetch is requested.
    /// Returns `None` when the form is closed.
    pub fn set_date(&mut self, date: NaiveDate) -> Option<SlotRequest> {
        if !self.is_open() {
            tracing::debug!(date = %date, "date change on closed form ignored");
            return None;
        }
        self.draft.date = date;
        self.draft.time = None;
        Some(self.retarget_slots(date))
    }

    fn retarget_slots(&mut self, date: NaiveDate) -> SlotRequest {
        self.slots = Slots::Unavailable;
        self.slot_target = Some(date);
        SlotRequest { date }
    }

    // ── Slot results ────────────────────────────────────────────────

    /// Apply a completed slot fetch. The result is dropped unless the
    /// request's date still matches the current target; a response for
    /// a superseded date, or one arriving after the form closed, is a
    /// no-op.
    pub fn apply_slots(&mut self, request: SlotRequest, slots: Slots) {
        if !self.is_open() || self.slot_target != Some(request.date) {
            tracing::debug!(date = %request.date, "stale slot response discarded");
            return;
        }
        self.slots = slots;
        if let Some(time) = self.remembered_time.take() {
            if self.slots.offers(time) {
                self.draft.time = Some(time);
            }
        }
    }

    /// Fetch and apply slots for the current target date.
    pub async fn refresh_slots(&mut self, service: &impl BookingService) {
        if let Some(date) = self.slot_target {
            let request = SlotRequest { date };
            let slots = slots::fetch_slots(service, date).await;
            self.apply_slots(request, slots);
        }
    }

    // ── Submission ──────────────────────────────────────────────────

    /// Validate, convert to the transport format, and create or update
    /// per the current mode. On success the draft is reset, the form
    /// closes, and the caller gets a summary to present (and should
    /// refresh the booking list). On failure the form stays open with
    /// the draft intact.
    pub async fn submit(
        &mut self,
        service: &impl BookingService,
    ) -> Result<BookingSummary, SubmitError> {
        let id = match &self.state {
            FormState::Closed => return Err(SubmitError::NotOpen),
            FormState::OpenCreate => None,
            FormState::OpenEdit { id } => Some(id.clone()),
        };

        let payload = match self.build_payload() {
            Ok(payload) => {
                self.errors.clear();
                payload
            }
            Err(errors) => {
                self.errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }
        };

        let result = match &id {
            Some(id) => service.update_booking(id, &payload).await,
            None => service.create_booking(&payload).await,
        };

        match result {
            Ok(saved) => {
                tracing::debug!(id = %saved.id, "booking saved");
                let summary = BookingSummary::from_payload(&payload);
                self.reset();
                Ok(summary)
            }
            Err(err) => {
                tracing::warn!(error = %err, "booking submission failed");
                Err(SubmitError::Service(err))
            }
        }
    }

    fn build_payload(&self) -> Result<BookingPayload, ValidationErrors> {
        let mut errors = validate_draft(&self.draft);
        if let Some(time) = self.draft.time {
            // the selection must come from the currently offered slots
            if !self.slots.offers(time) {
                errors.insert(
                    Field::Time,
                    "Selected time is no longer available.".to_string(),
                );
            }
        }
        match self.draft.time {
            Some(time) if errors.is_empty() => Ok(BookingPayload {
                name: self.draft.name.clone(),
                contact: self.draft.contact.clone(),
                date: self.draft.date,
                time,
                guests: self.draft.guests,
            }),
            _ => Err(errors),
        }
    }
}

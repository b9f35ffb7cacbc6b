//! Booking list controller
//!
//! Sole owner of the booking collection. Writes go through the service
//! and reconcile local state afterwards: create/update trigger a full
//! reload (the server recomputes ids and derived fields), delete is an
//! optimistic local removal.

use shared::{Booking, BookingPayload};

use crate::error::ClientResult;
use crate::service::BookingService;

/// The booking targeted by a pending dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    PendingEdit(String),
    PendingDelete(String),
}

/// Booking collection controller
#[derive(Debug, Default)]
pub struct BookingList {
    bookings: Vec<Booking>,
    loading: bool,
    error: Option<String>,
    selection: Option<Selection>,
}

impl BookingList {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Read-only views ─────────────────────────────────────────────

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The booking the current selection points at, if still present.
    pub fn selected_booking(&self) -> Option<&Booking> {
        let id = match self.selection.as_ref()? {
            Selection::PendingEdit(id) | Selection::PendingDelete(id) => id,
        };
        self.bookings.iter().find(|b| b.id == *id)
    }

    // ── Operations ──────────────────────────────────────────────────

    /// Replace the collection from the service. On failure the
    /// collection is cleared and a user-visible error is set; stale
    /// rows are never shown without an error indication.
    pub async fn load(&mut self, service: &impl BookingService) {
        self.loading = true;
        self.error = None;

        match service.list_bookings().await {
            Ok(bookings) => {
                tracing::debug!(count = bookings.len(), "bookings loaded");
                self.bookings = bookings;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load bookings");
                self.bookings.clear();
                self.error = Some("Failed to fetch bookings. Please try again.".to_string());
            }
        }

        self.loading = false;
    }

    /// Create via the service, then reload to pick up the assigned id
    /// and server order.
    pub async fn create(
        &mut self,
        service: &impl BookingService,
        payload: &BookingPayload,
    ) -> ClientResult<()> {
        service.create_booking(payload).await?;
        self.load(service).await;
        Ok(())
    }

    /// Update via the service, then reload.
    pub async fn update(
        &mut self,
        service: &impl BookingService,
        id: &str,
        payload: &BookingPayload,
    ) -> ClientResult<()> {
        service.update_booking(id, payload).await?;
        self.load(service).await;
        Ok(())
    }

    /// Delete via the service; on success the matching entry is
    /// removed locally without a reload. On failure the collection is
    /// untouched and the service message is surfaced.
    pub async fn remove(&mut self, service: &impl BookingService, id: &str) -> ClientResult<()> {
        match service.delete_booking(id).await {
            Ok(()) => {
                self.bookings.retain(|b| b.id != id);
                if matches!(&self.selection, Some(Selection::PendingDelete(sel)) if sel.as_str() == id) {
                    self.selection = None;
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to delete booking");
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Prepend a booking the caller just created, ahead of the next
    /// authoritative reload.
    pub fn insert_local(&mut self, booking: Booking) {
        self.bookings.insert(0, booking);
    }

    // ── Selection ───────────────────────────────────────────────────

    pub fn select_for_edit(&mut self, id: impl Into<String>) {
        self.selection = Some(Selection::PendingEdit(id.into()));
    }

    pub fn select_for_delete(&mut self, id: impl Into<String>) {
        self.selection = Some(Selection::PendingDelete(id.into()));
    }

    /// Clear the selection when the corresponding dialog closes.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }
}

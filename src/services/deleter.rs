//! Deletion submitter: the arm/confirm guard composed with the store call.
//!
//! Local removal is not performed here — the caller applies it on the
//! direct success path, and the feed's delete event covers the other
//! arrival path; both are idempotent through the collection.

use std::sync::Arc;
use std::time::Duration;

use crate::managers::delete_confirm::{ConfirmAction, DeleteConfirm};
use crate::store::RecordStore;
use crate::types::errors::StoreError;

/// Result of pressing the delete control for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// First press: the control armed; nothing was deleted.
    Armed,
    /// Confirmed press: the remote delete succeeded.
    Deleted,
}

/// Issues confirmed delete requests.
pub struct BookmarkDeleter {
    store: Arc<dyn RecordStore>,
    confirm: DeleteConfirm,
}

impl BookmarkDeleter {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            confirm: DeleteConfirm::new(),
        }
    }

    /// Uses a custom disarm window for the confirm guard.
    pub fn with_window(store: Arc<dyn RecordStore>, window: Duration) -> Self {
        Self {
            store,
            confirm: DeleteConfirm::with_window(window),
        }
    }

    /// Presses the delete control for the record.
    ///
    /// The first press arms; a confirming press issues exactly one delete
    /// request. A failed remote delete surfaces the error with the control
    /// re-armed, so the record is never silently left visible-but-deleted
    /// or deleted-but-visible.
    pub async fn request_delete(&mut self, id: &str) -> Result<DeleteOutcome, StoreError> {
        match self.confirm.press(id) {
            ConfirmAction::Armed => Ok(DeleteOutcome::Armed),
            ConfirmAction::Confirmed => match self.store.delete(id).await {
                Ok(()) => Ok(DeleteOutcome::Deleted),
                Err(err) => {
                    // Re-arm with a fresh window so the user can retry.
                    self.confirm.press(id);
                    Err(err)
                }
            },
        }
    }

    /// Whether the control is currently armed for this record.
    pub fn is_armed(&self, id: &str) -> bool {
        self.confirm.is_armed(id)
    }
}

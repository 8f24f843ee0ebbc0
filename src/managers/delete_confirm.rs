//! Two-step confirmation guard for bookmark deletion.
//!
//! A first press arms the control; a second press on the same record within
//! the window confirms. The window is an `Instant` deadline checked at press
//! time, so an expired arm re-arms instead of confirming and there is no
//! background timer to cancel.

use std::time::{Duration, Instant};

/// How long an armed control stays armed before falling back to disarmed.
pub const DISARM_WINDOW: Duration = Duration::from_secs(3);

/// Outcome of pressing the delete control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// The control armed (or re-armed) for this record; nothing was deleted.
    Armed,
    /// The press confirmed a previously armed request.
    Confirmed,
}

/// Arm/confirm state for the delete control.
#[derive(Debug)]
pub struct DeleteConfirm {
    armed: Option<Armed>,
    window: Duration,
}

#[derive(Debug)]
struct Armed {
    id: String,
    at: Instant,
}

impl DeleteConfirm {
    pub fn new() -> Self {
        Self::with_window(DISARM_WINDOW)
    }

    /// Uses a custom disarm window. Tests shrink it to keep runs fast.
    pub fn with_window(window: Duration) -> Self {
        Self {
            armed: None,
            window,
        }
    }

    /// Presses the control for the given record id.
    ///
    /// Confirms only when the same id is armed and the window has not
    /// elapsed. Every other press (first press, expired arm, different
    /// record) arms with a fresh window.
    pub fn press(&mut self, id: &str) -> ConfirmAction {
        if self.is_armed(id) {
            self.armed = None;
            return ConfirmAction::Confirmed;
        }
        self.armed = Some(Armed {
            id: id.to_string(),
            at: Instant::now(),
        });
        ConfirmAction::Armed
    }

    /// Whether the control is currently armed for this id.
    pub fn is_armed(&self, id: &str) -> bool {
        match &self.armed {
            Some(armed) => armed.id == id && armed.at.elapsed() < self.window,
            None => false,
        }
    }

    /// Drops any armed state.
    pub fn disarm(&mut self) {
        self.armed = None;
    }
}

impl Default for DeleteConfirm {
    fn default() -> Self {
        Self::new()
    }
}

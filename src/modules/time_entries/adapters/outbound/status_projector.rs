// One-way projector from the session status to the observable ClockView.
//
// Responsibilities
// - Publish only when the derived flags actually change.
// - Never re-enter: a projection requested while another is in flight is dropped.
// - UI-owned fields are written through their own setters and never touch the derived flags.
//
// Boundaries
// - Nothing read from the view flows back into the state machine.

use crate::modules::time_entries::core::state::SessionStatus;
use crate::modules::time_entries::core::view::ClockView;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    InSync,
    Propagating,
}

pub struct StatusProjector {
    sender: watch::Sender<ClockView>,
    propagating: AtomicBool,
}

impl StatusProjector {
    pub fn new(status: SessionStatus) -> Self {
        let (sender, _) = watch::channel(ClockView::from(status));
        Self {
            sender,
            propagating: AtomicBool::new(false),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ClockView> {
        self.sender.subscribe()
    }

    pub fn is_watched(&self) -> bool {
        self.sender.receiver_count() > 0
    }

    pub fn current(&self) -> ClockView {
        self.sender.borrow().clone()
    }

    pub fn sync_state(&self) -> SyncState {
        if self.propagating.load(Ordering::Acquire) {
            SyncState::Propagating
        } else {
            SyncState::InSync
        }
    }

    /// Republishes the derived flags for `status`. Returns whether subscribers were notified.
    pub fn project(&self, status: SessionStatus) -> bool {
        if self
            .propagating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(%status, "projection already in flight, skipped");
            return false;
        }
        let changed = self.sender.send_if_modified(|view| view.apply_status(status));
        self.propagating.store(false, Ordering::Release);
        if changed {
            tracing::debug!(%status, "clock view republished");
        }
        changed
    }

    pub fn set_check_in_note(&self, note: impl Into<String>) {
        let note = note.into();
        self.sender.send_if_modified(|view| {
            if view.check_in_note == note {
                return false;
            }
            view.check_in_note = note;
            true
        });
    }

    pub fn set_check_out_note(&self, note: impl Into<String>) {
        let note = note.into();
        self.sender.send_if_modified(|view| {
            if view.check_out_note == note {
                return false;
            }
            view.check_out_note = note;
            true
        });
    }

    pub fn set_location_denied(&self, denied: bool) {
        self.sender.send_if_modified(|view| {
            if view.location_denied == denied {
                return false;
            }
            view.location_denied = denied;
            true
        });
    }
}

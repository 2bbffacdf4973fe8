// Coarse view of the clock for consumers that do not hold the full entry.
//
// Responsibilities
// - `is_active` / `is_paused` are derived from SessionStatus and nothing else writes them.
// - The note drafts and the location flag belong to the UI and are carried alongside.

use crate::modules::time_entries::core::state::SessionStatus;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClockView {
    pub is_active: bool,
    pub is_paused: bool,
    pub check_in_note: String,
    pub check_out_note: String,
    pub location_denied: bool,
}

impl ClockView {
    /// Replaces the derived flags. Returns whether anything changed.
    pub fn apply_status(&mut self, status: SessionStatus) -> bool {
        let (is_active, is_paused) = (status.is_active(), status.is_paused());
        if self.is_active == is_active && self.is_paused == is_paused {
            return false;
        }
        self.is_active = is_active;
        self.is_paused = is_paused;
        true
    }
}

impl From<SessionStatus> for ClockView {
    fn from(status: SessionStatus) -> Self {
        Self {
            is_active: status.is_active(),
            is_paused: status.is_paused(),
            ..Self::default()
        }
    }
}

// Pure decision function for ending a break.
//
// Responsibilities
// - Reject without a current entry.
// - Resuming an entry that is not paused is a no-op: breaks and status stay as they are.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::break_ended::BreakEndedV1;
use crate::modules::time_entries::core::state::{EntryStatus, TimeEntryState};
use chrono::{DateTime, Utc};

pub fn decide_resume(state: &TimeEntryState, at: DateTime<Utc>) -> Decision {
    match &state.current {
        None => Decision::reject(DecideError::NoCurrentEntry),
        Some(entry) if entry.status == EntryStatus::Active => Decision::unchanged(),
        Some(entry) => Decision::accept(TimeEntryEvent::BreakEndedV1(BreakEndedV1 {
            time_entry_id: entry.id.clone(),
            ended_at: at,
        })),
    }
}

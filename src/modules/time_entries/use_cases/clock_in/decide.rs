// Pure decision function for clocking in.
//
// Responsibilities
// - Reject when a current entry already exists. Never overwrite or silently ignore it.
// - Otherwise emit ClockedInV1.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::clocked_in::ClockedInV1;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;

pub fn decide_clock_in(state: &TimeEntryState, command: ClockIn) -> Decision {
    if state.current.is_some() {
        return Decision::reject(DecideError::AlreadyActive);
    }
    Decision::accept(TimeEntryEvent::ClockedInV1(ClockedInV1 {
        time_entry_id: command.time_entry_id,
        user_id: command.user_id,
        title: command.title,
        check_in_notes: command.check_in_notes,
        project_id: command.project_id,
        tags: command.tags,
        started_at: command.at,
    }))
}

// Pure decision function for completing the current entry.
//
// Responsibilities
// - Reject without a current entry.
// - Compute the break total as if a trailing open break ended at the clock-out instant.

use crate::modules::time_entries::core::breaks::total_break_time;
use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::clocked_out::ClockedOutV1;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;

pub fn decide_clock_out(state: &TimeEntryState, command: ClockOut) -> Decision {
    let Some(entry) = &state.current else {
        return Decision::reject(DecideError::NoCurrentEntry);
    };
    Decision::accept(TimeEntryEvent::ClockedOutV1(ClockedOutV1 {
        time_entry_id: entry.id.clone(),
        check_out_notes: command.check_out_notes,
        ended_at: command.at,
        break_time: total_break_time(&entry.break_periods, command.at),
    }))
}

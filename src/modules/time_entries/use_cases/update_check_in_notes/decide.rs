// Pure decision function for editing the check-in notes of the current entry.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::check_in_notes_updated::CheckInNotesUpdatedV1;
use crate::modules::time_entries::core::state::TimeEntryState;

pub fn decide_update_check_in_notes(state: &TimeEntryState, notes: String) -> Decision {
    match &state.current {
        None => Decision::reject(DecideError::NoCurrentEntry),
        Some(entry) if entry.check_in_notes == notes => Decision::unchanged(),
        Some(entry) => {
            Decision::accept(TimeEntryEvent::CheckInNotesUpdatedV1(CheckInNotesUpdatedV1 {
                time_entry_id: entry.id.clone(),
                check_in_notes: notes,
            }))
        }
    }
}

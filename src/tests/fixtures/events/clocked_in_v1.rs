// Shared test fixture for ClockedInV1.

use crate::modules::time_entries::core::events::v1::clocked_in::ClockedInV1;
use crate::tests::fixtures::commands::clock_in::ClockInBuilder;

/// Builder function returning a canonical event instance for tests.
pub fn make_clocked_in_v1_event() -> ClockedInV1 {
    let command = ClockInBuilder::new().build();
    ClockedInV1 {
        time_entry_id: command.time_entry_id,
        user_id: command.user_id,
        title: command.title,
        check_in_notes: command.check_in_notes,
        project_id: command.project_id,
        tags: command.tags,
        started_at: command.at,
    }
}

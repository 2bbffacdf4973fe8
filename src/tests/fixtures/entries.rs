// Canonical current and completed entries.

use crate::modules::time_entries::core::state::{BreakPeriod, CurrentEntry, EntryStatus, TimeEntry};
use crate::tests::fixtures::at;

pub fn current_entry() -> CurrentEntry {
    CurrentEntry {
        id: "te-fixed-0001".into(),
        user_id: "user-fixed-0001".into(),
        title: String::new(),
        check_in_notes: "working".into(),
        start_time: at(0),
        break_periods: vec![],
        status: EntryStatus::Active,
        project_id: None,
        tags: vec!["Work".into()],
    }
}

/// One hour long, with a closed ten minute break halfway.
pub fn completed_entry(id: &str, start_secs: i64) -> TimeEntry {
    TimeEntry {
        id: id.into(),
        user_id: "user-fixed-0001".into(),
        title: String::new(),
        description: None,
        start_time: at(start_secs),
        end_time: at(start_secs + 3_600),
        check_in_notes: Some("working".into()),
        check_out_notes: Some("done".into()),
        break_periods: vec![BreakPeriod {
            start: at(start_secs + 1_500),
            end: Some(at(start_secs + 2_100)),
        }],
        break_time: 600_000,
        project_id: None,
        tags: vec!["Work".into()],
    }
}

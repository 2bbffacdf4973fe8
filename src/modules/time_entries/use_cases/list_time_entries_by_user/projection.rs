use crate::modules::time_entries::core::state::TimeEntry;
use crate::shared::core::primitives::{Millis, to_iso_string};
use serde::Serialize;

/// Read model of a completed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntryView {
    pub time_entry_id: String,
    pub user_id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub check_in_notes: Option<String>,
    pub check_out_notes: Option<String>,
    pub break_time_ms: Millis,
    pub worked_ms: Millis,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
}

impl From<&TimeEntry> for TimeEntryView {
    fn from(entry: &TimeEntry) -> Self {
        Self {
            time_entry_id: entry.id.clone(),
            user_id: entry.user_id.clone(),
            title: entry.title.clone(),
            start_time: to_iso_string(entry.start_time),
            end_time: to_iso_string(entry.end_time),
            check_in_notes: entry.check_in_notes.clone(),
            check_out_notes: entry.check_out_notes.clone(),
            break_time_ms: entry.break_time,
            worked_ms: entry.worked_duration(),
            project_id: entry.project_id.clone(),
            tags: entry.tags.clone(),
        }
    }
}

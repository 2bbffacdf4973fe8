// Command data type for opening a new current entry.
//
// Responsibilities
// - Carry the identifiers and the instant chosen by the handler, so the decider stays pure.
// - Be independent of transport details (not tied to HTTP or GraphQL).

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockIn {
    pub time_entry_id: String,
    pub user_id: String,
    pub title: String,
    pub check_in_notes: String,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
    pub at: DateTime<Utc>,
}

/// Caller supplied part of a clock-in. The session adds the identifiers and the instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockInRequest {
    pub check_in_notes: String,
    pub title: String,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
}

impl ClockInRequest {
    pub fn with_notes(check_in_notes: impl Into<String>) -> Self {
        Self {
            check_in_notes: check_in_notes.into(),
            ..Self::default()
        }
    }
}

// Event payload: ClockedInV1.
//
// Purpose
// - Record that a user opened a new current entry.
//
// Inputs and outputs
// - Inputs: the clock-in command accepted by the decider.
// - Outputs: folded by evolve into a current entry with an empty break list.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ClockedInV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub title: String,
    pub check_in_notes: String,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
    pub started_at: DateTime<Utc>,
}

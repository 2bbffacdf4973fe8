// Event payload: BreakEndedV1. Closes the trailing open break of the current entry.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct BreakEndedV1 {
    pub time_entry_id: String,
    pub ended_at: DateTime<Utc>,
}

// Event payload: BreakStartedV1. Appends an open break to the current entry.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct BreakStartedV1 {
    pub time_entry_id: String,
    pub started_at: DateTime<Utc>,
}

// Event payload: ClockedOutV1.
//
// Purpose
// - Record that the current entry was completed.
//
// Responsibilities
// - Carry the break total computed by the decider, so evolve does not recompute it.
// - A trailing open break is closed at `ended_at` by evolve.

use crate::shared::core::primitives::Millis;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ClockedOutV1 {
    pub time_entry_id: String,
    pub check_out_notes: String,
    pub ended_at: DateTime<Utc>,
    pub break_time: Millis,
}

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockOut {
    pub check_out_notes: String,
    pub at: DateTime<Utc>,
}

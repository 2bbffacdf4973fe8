// Root event enumeration for the time entry lifecycle and the versioned payloads.
//
// Versioning and evolution
// - Prefer additive changes. A breaking change gets a new version and a new variant.
//
// Timestamps
// - Every instant is a DateTime<Utc> truncated to milliseconds.

pub mod v1 {
    pub mod break_ended;
    pub mod break_started;
    pub mod check_in_notes_updated;
    pub mod clocked_in;
    pub mod clocked_out;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TimeEntryEvent {
    ClockedInV1(v1::clocked_in::ClockedInV1),
    BreakStartedV1(v1::break_started::BreakStartedV1),
    BreakEndedV1(v1::break_ended::BreakEndedV1),
    CheckInNotesUpdatedV1(v1::check_in_notes_updated::CheckInNotesUpdatedV1),
    ClockedOutV1(v1::clocked_out::ClockedOutV1),
}

impl TimeEntryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TimeEntryEvent::ClockedInV1(_) => "ClockedIn",
            TimeEntryEvent::BreakStartedV1(_) => "BreakStarted",
            TimeEntryEvent::BreakEndedV1(_) => "BreakEnded",
            TimeEntryEvent::CheckInNotesUpdatedV1(_) => "CheckInNotesUpdated",
            TimeEntryEvent::ClockedOutV1(_) => "ClockedOut",
        }
    }
}

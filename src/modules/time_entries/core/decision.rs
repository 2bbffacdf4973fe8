use crate::modules::time_entries::core::events::TimeEntryEvent;

/// Rejected transitions of the time entry state machine.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("already clocked in")]
    AlreadyActive,

    #[error("no current time entry")]
    NoCurrentEntry,
}

/// Outcome of a decider. `Accepted` with no events is an idempotent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<TimeEntryEvent> },
    Rejected { reason: DecideError },
}

impl Decision {
    pub fn accept(event: TimeEntryEvent) -> Self {
        Decision::Accepted {
            events: vec![event],
        }
    }

    pub fn unchanged() -> Self {
        Decision::Accepted { events: Vec::new() }
    }

    pub fn reject(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }
}

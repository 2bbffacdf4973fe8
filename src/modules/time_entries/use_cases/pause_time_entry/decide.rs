// Pure decision function for starting a break.
//
// Responsibilities
// - Reject without a current entry.
// - Pausing an entry that is already paused is a no-op.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::break_started::BreakStartedV1;
use crate::modules::time_entries::core::state::{EntryStatus, TimeEntryState};
use chrono::{DateTime, Utc};

pub fn decide_pause(state: &TimeEntryState, at: DateTime<Utc>) -> Decision {
    match &state.current {
        None => Decision::reject(DecideError::NoCurrentEntry),
        Some(entry) if entry.status == EntryStatus::Paused => Decision::unchanged(),
        Some(entry) => Decision::accept(TimeEntryEvent::BreakStartedV1(BreakStartedV1 {
            time_entry_id: entry.id.clone(),
            started_at: at,
        })),
    }
}

#[cfg(test)]
mod pause_decide_tests {
    use super::*;
    use crate::modules::time_entries::core::state::BreakPeriod;
    use crate::tests::fixtures::{at, current_entry};
    use rstest::rstest;

    #[rstest]
    fn it_should_reject_a_pause_without_a_current_entry() {
        assert_eq!(
            decide_pause(&TimeEntryState::default(), at(1)),
            Decision::reject(DecideError::NoCurrentEntry)
        );
    }

    #[rstest]
    fn it_should_start_a_break_when_active() {
        let state = TimeEntryState::new(Some(current_entry()), vec![]);
        assert_eq!(
            decide_pause(&state, at(10)),
            Decision::accept(TimeEntryEvent::BreakStartedV1(BreakStartedV1 {
                time_entry_id: "te-fixed-0001".into(),
                started_at: at(10),
            }))
        );
    }

    #[rstest]
    fn it_should_ignore_a_pause_when_already_paused() {
        let mut entry = current_entry();
        entry.break_periods.push(BreakPeriod::open(at(5)));
        entry.status = EntryStatus::Paused;
        let state = TimeEntryState::new(Some(entry), vec![]);
        assert_eq!(decide_pause(&state, at(10)), Decision::unchanged());
    }
}

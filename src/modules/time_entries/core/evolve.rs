// Evolve function: combine a prior state with an event to produce the next state.
//
// Boundaries
// - No input or output. No side effects.
// - An event that does not fit the state (wrong entry id, wrong status) leaves the state unchanged.

use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::state::{
    BreakPeriod, CurrentEntry, EntryStatus, TimeEntry, TimeEntryState,
};

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

pub fn evolve(mut state: TimeEntryState, event: TimeEntryEvent) -> TimeEntryState {
    match event {
        TimeEntryEvent::ClockedInV1(e) => {
            if state.current.is_none() {
                state.current = Some(CurrentEntry {
                    id: e.time_entry_id,
                    user_id: e.user_id,
                    title: e.title,
                    check_in_notes: e.check_in_notes,
                    start_time: e.started_at,
                    break_periods: Vec::new(),
                    status: EntryStatus::Active,
                    project_id: e.project_id,
                    tags: e.tags,
                });
            }
            state
        }
        TimeEntryEvent::BreakStartedV1(e) => {
            if let Some(entry) = state.current.as_mut() {
                if entry.id == e.time_entry_id && entry.status == EntryStatus::Active {
                    entry.break_periods.push(BreakPeriod::open(e.started_at));
                    entry.status = EntryStatus::Paused;
                }
            }
            state
        }
        TimeEntryEvent::BreakEndedV1(e) => {
            if let Some(entry) = state.current.as_mut() {
                if entry.id == e.time_entry_id && entry.status == EntryStatus::Paused {
                    if let Some(open) = entry.break_periods.last_mut().filter(|p| p.is_open()) {
                        open.end = Some(e.ended_at);
                    }
                    entry.status = EntryStatus::Active;
                }
            }
            state
        }
        TimeEntryEvent::CheckInNotesUpdatedV1(e) => {
            if let Some(entry) = state.current.as_mut() {
                if entry.id == e.time_entry_id {
                    entry.check_in_notes = e.check_in_notes;
                }
            }
            state
        }
        TimeEntryEvent::ClockedOutV1(e) => {
            let matches = state
                .current
                .as_ref()
                .is_some_and(|entry| entry.id == e.time_entry_id);
            if !matches {
                return state;
            }
            let Some(mut entry) = state.current.take() else {
                return state;
            };
            for period in entry.break_periods.iter_mut().filter(|p| p.is_open()) {
                period.end = Some(e.ended_at);
            }
            state.entries.insert(
                0,
                TimeEntry {
                    id: entry.id,
                    user_id: entry.user_id,
                    title: entry.title,
                    description: None,
                    start_time: entry.start_time,
                    end_time: e.ended_at,
                    check_in_notes: non_empty(entry.check_in_notes),
                    check_out_notes: non_empty(e.check_out_notes),
                    break_periods: entry.break_periods,
                    break_time: e.break_time,
                    project_id: entry.project_id,
                    tags: entry.tags,
                },
            );
            state
        }
    }
}

#[cfg(test)]
mod time_entry_evolve_tests {
    use super::*;
    use crate::modules::time_entries::core::events::v1::break_ended::BreakEndedV1;
    use crate::modules::time_entries::core::events::v1::break_started::BreakStartedV1;
    use crate::modules::time_entries::core::events::v1::check_in_notes_updated::CheckInNotesUpdatedV1;
    use crate::modules::time_entries::core::events::v1::clocked_out::ClockedOutV1;
    use crate::modules::time_entries::core::state::SessionStatus;
    use crate::tests::fixtures::{at, make_clocked_in_v1_event};
    use rstest::{fixture, rstest};

    #[fixture]
    fn active_state() -> TimeEntryState {
        evolve(
            TimeEntryState::default(),
            TimeEntryEvent::ClockedInV1(make_clocked_in_v1_event()),
        )
    }

    fn break_started(at_secs: i64) -> TimeEntryEvent {
        TimeEntryEvent::BreakStartedV1(BreakStartedV1 {
            time_entry_id: "te-fixed-0001".into(),
            started_at: at(at_secs),
        })
    }

    fn break_ended(at_secs: i64) -> TimeEntryEvent {
        TimeEntryEvent::BreakEndedV1(BreakEndedV1 {
            time_entry_id: "te-fixed-0001".into(),
            ended_at: at(at_secs),
        })
    }

    #[rstest]
    fn it_should_evolve_idle_to_active_on_clock_in(active_state: TimeEntryState) {
        assert_eq!(active_state.status(), SessionStatus::Active);
        let entry = active_state.current.unwrap();
        assert_eq!(entry.id, "te-fixed-0001");
        assert_eq!(entry.user_id, "user-fixed-0001");
        assert_eq!(entry.check_in_notes, "working");
        assert_eq!(entry.start_time, at(0));
        assert!(entry.break_periods.is_empty());
    }

    #[rstest]
    fn it_should_not_replace_the_current_entry_on_a_second_clock_in(active_state: TimeEntryState) {
        let mut other = make_clocked_in_v1_event();
        other.time_entry_id = "te-other".into();
        let next = evolve(active_state.clone(), TimeEntryEvent::ClockedInV1(other));
        assert_eq!(next, active_state);
    }

    #[rstest]
    fn it_should_open_and_close_a_break(active_state: TimeEntryState) {
        let paused = evolve(active_state, break_started(10));
        assert_eq!(paused.status(), SessionStatus::Paused);
        assert_eq!(
            paused.current.as_ref().unwrap().break_periods,
            vec![BreakPeriod::open(at(10))]
        );

        let resumed = evolve(paused, break_ended(15));
        assert_eq!(resumed.status(), SessionStatus::Active);
        assert_eq!(
            resumed.current.unwrap().break_periods,
            vec![BreakPeriod {
                start: at(10),
                end: Some(at(15)),
            }]
        );
    }

    #[rstest]
    fn it_should_ignore_a_break_end_while_active(active_state: TimeEntryState) {
        let next = evolve(active_state.clone(), break_ended(5));
        assert_eq!(next, active_state);
    }

    #[rstest]
    fn it_should_ignore_events_for_another_entry(active_state: TimeEntryState) {
        let next = evolve(
            active_state.clone(),
            TimeEntryEvent::CheckInNotesUpdatedV1(CheckInNotesUpdatedV1 {
                time_entry_id: "te-other".into(),
                check_in_notes: "hijack".into(),
            }),
        );
        assert_eq!(next, active_state);
    }

    #[rstest]
    fn it_should_overwrite_check_in_notes(active_state: TimeEntryState) {
        let next = evolve(
            active_state,
            TimeEntryEvent::CheckInNotesUpdatedV1(CheckInNotesUpdatedV1 {
                time_entry_id: "te-fixed-0001".into(),
                check_in_notes: "reviewing".into(),
            }),
        );
        assert_eq!(next.current.unwrap().check_in_notes, "reviewing");
    }

    #[rstest]
    fn it_should_archive_the_entry_newest_first_on_clock_out(active_state: TimeEntryState) {
        let mut state = active_state;
        state.entries.push(crate::tests::fixtures::completed_entry("te-older", 0));
        let paused = evolve(state, break_started(10));

        let done = evolve(
            paused,
            TimeEntryEvent::ClockedOutV1(ClockedOutV1 {
                time_entry_id: "te-fixed-0001".into(),
                check_out_notes: "done".into(),
                ended_at: at(18),
                break_time: 8_000,
            }),
        );

        assert_eq!(done.status(), SessionStatus::Idle);
        assert_eq!(done.entries.len(), 2);
        let archived = &done.entries[0];
        assert_eq!(archived.id, "te-fixed-0001");
        assert_eq!(archived.end_time, at(18));
        assert_eq!(archived.check_out_notes.as_deref(), Some("done"));
        assert_eq!(archived.break_time, 8_000);
        assert!(archived.break_periods.iter().all(|p| !p.is_open()));
        assert_eq!(done.entries[1].id, "te-older");
    }
}

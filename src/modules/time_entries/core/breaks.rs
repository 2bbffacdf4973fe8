// Break accounting and elapsed time.
//
// Boundaries
// - Pure functions of break periods and an explicit `now`. No clock reads.
// - Every interval contributes a non-negative duration, so malformed data can only shrink totals.

use crate::modules::time_entries::core::state::{BreakPeriod, CurrentEntry};
use crate::shared::core::primitives::{Millis, duration_ms};
use chrono::{DateTime, Utc};

/// Sum of the closed intervals only.
pub fn closed_break_time(periods: &[BreakPeriod]) -> Millis {
    periods
        .iter()
        .filter_map(|period| period.end.map(|end| duration_ms(period.start, end)))
        .sum()
}

/// Closed intervals plus any open interval counted up to `now`.
pub fn total_break_time(periods: &[BreakPeriod], now: DateTime<Utc>) -> Millis {
    periods
        .iter()
        .map(|period| duration_ms(period.start, period.end.unwrap_or(now)))
        .sum()
}

/// Net working time of the current entry at `now`, clamped at zero.
pub fn elapsed_time(entry: Option<&CurrentEntry>, now: DateTime<Utc>) -> Millis {
    match entry {
        None => 0,
        Some(entry) => {
            (duration_ms(entry.start_time, now) - entry.total_break_time(now)).max(0)
        }
    }
}

#[cfg(test)]
mod breaks_tests {
    use super::*;
    use crate::modules::time_entries::core::state::EntryStatus;
    use crate::tests::fixtures::{at, current_entry};
    use rstest::rstest;

    fn closed(start: i64, end: i64) -> BreakPeriod {
        BreakPeriod {
            start: at(start),
            end: Some(at(end)),
        }
    }

    #[rstest]
    fn it_should_sum_closed_breaks_only() {
        let periods = vec![closed(10, 15), closed(20, 22), BreakPeriod::open(at(30))];
        assert_eq!(closed_break_time(&periods), 7_000);
    }

    #[rstest]
    fn it_should_count_the_open_break_up_to_now() {
        let periods = vec![closed(10, 15), BreakPeriod::open(at(30))];
        assert_eq!(total_break_time(&periods, at(34)), 9_000);
    }

    #[rstest]
    fn it_should_ignore_inverted_intervals() {
        let periods = vec![closed(15, 10)];
        assert_eq!(closed_break_time(&periods), 0);
        assert_eq!(total_break_time(&periods, at(100)), 0);
    }

    #[rstest]
    fn it_should_return_zero_elapsed_without_a_current_entry() {
        assert_eq!(elapsed_time(None, at(100)), 0);
    }

    #[rstest]
    fn it_should_subtract_breaks_from_elapsed_time() {
        let mut entry = current_entry();
        entry.break_periods = vec![closed(10, 15)];
        assert_eq!(elapsed_time(Some(&entry), at(18)), 13_000);
    }

    #[rstest]
    fn it_should_hold_elapsed_time_constant_while_paused() {
        let mut entry = current_entry();
        entry.break_periods = vec![BreakPeriod::open(at(10))];
        entry.status = EntryStatus::Paused;
        assert_eq!(elapsed_time(Some(&entry), at(11)), 10_000);
        assert_eq!(elapsed_time(Some(&entry), at(500)), 10_000);
    }

    #[rstest]
    fn it_should_clamp_elapsed_time_at_zero_when_the_clock_is_behind() {
        let entry = current_entry();
        assert_eq!(elapsed_time(Some(&entry), at(-60)), 0);
    }
}

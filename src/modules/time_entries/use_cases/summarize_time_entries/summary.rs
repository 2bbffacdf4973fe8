// Dashboard statistics over a user's completed entries.
//
// Responsibilities
// - Worked time is always net of breaks.
// - Days and ISO weeks are taken from the entry's start time in UTC.

use crate::modules::time_entries::core::state::TimeEntry;
use crate::shared::core::primitives::Millis;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeEntrySummary {
    pub entry_count: u64,
    pub total_worked_ms: Millis,
    pub total_break_ms: Millis,
    pub worked_this_week_ms: Millis,
    pub days_worked: u64,
    pub average_daily_worked_ms: Millis,
}

pub fn summarize(entries: &[TimeEntry], now: DateTime<Utc>) -> TimeEntrySummary {
    let this_week = now.iso_week();
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut summary = TimeEntrySummary::default();

    for entry in entries {
        let worked = entry.worked_duration();
        summary.entry_count += 1;
        summary.total_worked_ms += worked;
        summary.total_break_ms += entry.break_time.max(0);
        if entry.start_time.iso_week() == this_week {
            summary.worked_this_week_ms += worked;
        }
        days.insert(entry.start_time.date_naive());
    }

    summary.days_worked = days.len() as u64;
    if summary.days_worked > 0 {
        summary.average_daily_worked_ms = summary.total_worked_ms / summary.days_worked as i64;
    }
    summary
}

// TimeEntryState is the canonical state of one user's time tracking after folding events.
//
// Lifecycle
// - Idle: no current entry.
// - Active: current entry open, no open break.
// - Paused: current entry open, trailing break open.
//
// Invariants
// - At most one current entry.
// - At most one open break, and only as the trailing break of the current entry.
// - Completed entries are never mutated once moved into `entries`.

use crate::modules::time_entries::core::breaks::{closed_break_time, total_break_time};
use crate::shared::core::primitives::{Millis, duration_ms, iso_millis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPeriod {
    #[serde(with = "iso_millis")]
    pub start: DateTime<Utc>,
    #[serde(default, with = "iso_millis::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl BreakPeriod {
    pub fn open(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Active,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Idle,
    Active,
    Paused,
}

impl SessionStatus {
    pub fn is_active(self) -> bool {
        !matches!(self, SessionStatus::Idle)
    }

    pub fn is_paused(self) -> bool {
        matches!(self, SessionStatus::Paused)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Idle => write!(f, "idle"),
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Paused => write!(f, "paused"),
        }
    }
}

/// The open entry of a user, not yet clocked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentEntry {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub check_in_notes: String,
    #[serde(with = "iso_millis")]
    pub start_time: DateTime<Utc>,
    pub break_periods: Vec<BreakPeriod>,
    pub status: EntryStatus,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
}

impl CurrentEntry {
    pub fn open_break(&self) -> Option<&BreakPeriod> {
        self.break_periods.last().filter(|period| period.is_open())
    }

    pub fn total_break_time(&self, now: DateTime<Utc>) -> Millis {
        total_break_time(&self.break_periods, now)
    }
}

/// A completed entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "iso_millis")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_notes: Option<String>,
    #[serde(default)]
    pub break_periods: Vec<BreakPeriod>,
    #[serde(default)]
    pub break_time: Millis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TimeEntry {
    pub fn wall_clock_duration(&self) -> Millis {
        duration_ms(self.start_time, self.end_time)
    }

    /// Wall clock duration minus breaks.
    pub fn worked_duration(&self) -> Millis {
        (self.wall_clock_duration() - self.break_time).max(0)
    }

    pub(crate) fn recomputed_break_time(&self) -> Millis {
        closed_break_time(&self.break_periods)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryState {
    pub current: Option<CurrentEntry>,
    /// Completed entries, newest first.
    pub entries: Vec<TimeEntry>,
}

impl TimeEntryState {
    pub fn new(current: Option<CurrentEntry>, entries: Vec<TimeEntry>) -> Self {
        Self { current, entries }
    }

    pub fn status(&self) -> SessionStatus {
        match &self.current {
            None => SessionStatus::Idle,
            Some(entry) => match entry.status {
                EntryStatus::Active => SessionStatus::Active,
                EntryStatus::Paused => SessionStatus::Paused,
            },
        }
    }
}

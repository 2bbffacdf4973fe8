// Key-value persistence of one user's time entries.
//
// Layout
// - `timeEntries_<userId>`: JSON array of completed entries, newest first.
// - `activeTimeEntry_<userId>`: JSON object of the current entry, removed while idle.
//
// Responsibilities
// - Write snapshots with ISO-8601 timestamps at millisecond precision.
// - Read leniently. A malformed field is treated as absent, reported as a
//   MalformedPersistedState and logged. Loading never fails because of bad data, only because
//   the store itself is unavailable.

use crate::modules::time_entries::core::state::{
    BreakPeriod, CurrentEntry, EntryStatus, TimeEntry, TimeEntryState,
};
use crate::shared::core::primitives::{Millis, parse_iso_string, to_iso_string};
use crate::shared::infrastructure::key_value_store::{KeyValueStore, StorageError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

pub fn time_entries_key(user_id: &str) -> String {
    format!("timeEntries_{user_id}")
}

pub fn active_time_entry_key(user_id: &str) -> String {
    format!("activeTimeEntry_{user_id}")
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedPersistedState {
    #[error("{key} is not valid JSON for its shape: {reason}")]
    Unparseable { key: String, reason: String },

    #[error("{field} has an unexpected value: {value}")]
    InvalidField { field: String, value: String },

    #[error("{field} is not a valid timestamp: {value}")]
    InvalidTimestamp { field: String, value: String },

    #[error("break {index} is open but not the last break")]
    OpenBreakNotTrailing { index: usize },

    #[error("status {persisted:?} does not match the break list")]
    InconsistentStatus { persisted: Option<String> },

    #[error("history record {index} skipped: {reason}")]
    SkippedHistoryRecord { index: usize, reason: String },
}

/// A value read back from storage together with what had to be repaired to get it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered<T> {
    pub value: T,
    pub problems: Vec<MalformedPersistedState>,
}

impl<T> Recovered<T> {
    fn clean(value: T) -> Self {
        Self {
            value,
            problems: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedBreakPeriod {
    start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedCurrentEntry<'a> {
    id: &'a str,
    user_id: &'a str,
    title: &'a str,
    check_in_notes: &'a str,
    start_time: String,
    break_periods: Vec<PersistedBreakPeriod>,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_id: Option<&'a str>,
    tags: &'a [String],
}

impl<'a> From<&'a CurrentEntry> for PersistedCurrentEntry<'a> {
    fn from(entry: &'a CurrentEntry) -> Self {
        Self {
            id: &entry.id,
            user_id: &entry.user_id,
            title: &entry.title,
            check_in_notes: &entry.check_in_notes,
            start_time: to_iso_string(entry.start_time),
            break_periods: entry
                .break_periods
                .iter()
                .map(|period| PersistedBreakPeriod {
                    start: to_iso_string(period.start),
                    end: period.end.map(to_iso_string),
                })
                .collect(),
            status: match entry.status {
                EntryStatus::Active => "active",
                EntryStatus::Paused => "paused",
            },
            project_id: entry.project_id.as_deref(),
            tags: &entry.tags,
        }
    }
}

/// Reads an explicit `null` as absent.
fn present(raw: Option<&Value>) -> Option<&Value> {
    raw.filter(|value| !value.is_null())
}

fn text_field(
    record: &Map<String, Value>,
    field: &str,
    problems: &mut Vec<MalformedPersistedState>,
) -> Option<String> {
    match record.get(field)? {
        Value::String(text) => Some(text.clone()),
        other => {
            problems.push(MalformedPersistedState::InvalidField {
                field: field.to_string(),
                value: other.to_string(),
            });
            None
        }
    }
}

/// An array field. A non-array is reported and read as empty.
fn array_field<'a>(
    record: &'a Map<String, Value>,
    field: &str,
    problems: &mut Vec<MalformedPersistedState>,
) -> &'a [Value] {
    match record.get(field) {
        None => &[],
        Some(Value::Array(items)) => items,
        Some(other) => {
            problems.push(MalformedPersistedState::InvalidField {
                field: field.to_string(),
                value: other.to_string(),
            });
            &[]
        }
    }
}

fn parse_timestamp(
    field: String,
    raw: Option<&Value>,
    problems: &mut Vec<MalformedPersistedState>,
) -> Option<DateTime<Utc>> {
    let raw = raw?;
    let parsed = raw.as_str().and_then(parse_iso_string);
    if parsed.is_none() {
        problems.push(MalformedPersistedState::InvalidTimestamp {
            field,
            value: raw.to_string(),
        });
    }
    parsed
}

/// Rebuilds a current entry from its persisted JSON object, repairing what it has to.
fn recover_current_entry(
    user_id: &str,
    record: &Map<String, Value>,
    now: DateTime<Utc>,
) -> Recovered<CurrentEntry> {
    let mut problems = Vec::new();

    let raw_start = record.get("startTime");
    if raw_start.is_none() {
        problems.push(MalformedPersistedState::InvalidTimestamp {
            field: "startTime".into(),
            value: "missing".into(),
        });
    }
    let start_time = parse_timestamp("startTime".into(), raw_start, &mut problems).unwrap_or(now);

    let mut break_periods: Vec<BreakPeriod> = Vec::new();
    for (index, raw) in array_field(record, "breakPeriods", &mut problems)
        .iter()
        .enumerate()
    {
        let Some(period) = raw.as_object() else {
            problems.push(MalformedPersistedState::InvalidField {
                field: format!("breakPeriods[{index}]"),
                value: raw.to_string(),
            });
            continue;
        };
        let start_field = format!("breakPeriods[{index}].start");
        let Some(raw_start) = period.get("start") else {
            problems.push(MalformedPersistedState::InvalidTimestamp {
                field: start_field,
                value: "missing".into(),
            });
            continue;
        };
        let Some(start) = parse_timestamp(start_field, Some(raw_start), &mut problems) else {
            continue;
        };
        let end = parse_timestamp(
            format!("breakPeriods[{index}].end"),
            present(period.get("end")),
            &mut problems,
        );
        break_periods.push(BreakPeriod { start, end });
    }

    let last = break_periods.len().saturating_sub(1);
    for (index, period) in break_periods.iter_mut().enumerate() {
        if index != last && period.is_open() {
            problems.push(MalformedPersistedState::OpenBreakNotTrailing { index });
            period.end = Some(period.start);
        }
    }

    let derived = if break_periods.last().is_some_and(BreakPeriod::is_open) {
        EntryStatus::Paused
    } else {
        EntryStatus::Active
    };
    let raw_status = record.get("status");
    let persisted_status = match raw_status.and_then(Value::as_str) {
        Some("active") => Some(EntryStatus::Active),
        Some("paused") => Some(EntryStatus::Paused),
        _ => None,
    };
    if persisted_status != Some(derived) {
        problems.push(MalformedPersistedState::InconsistentStatus {
            persisted: raw_status.map(|status| match status {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            }),
        });
    }

    let mut tags = Vec::new();
    for (index, raw) in array_field(record, "tags", &mut problems).iter().enumerate() {
        match raw {
            Value::String(tag) => tags.push(tag.clone()),
            other => problems.push(MalformedPersistedState::InvalidField {
                field: format!("tags[{index}]"),
                value: other.to_string(),
            }),
        }
    }

    let id = text_field(record, "id", &mut problems)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| uuid::Uuid::now_v7().to_string());
    let project_id = match present(record.get("projectId")) {
        Some(_) => text_field(record, "projectId", &mut problems),
        None => None,
    };

    Recovered {
        value: CurrentEntry {
            id,
            user_id: text_field(record, "userId", &mut problems)
                .unwrap_or_else(|| user_id.to_string()),
            title: text_field(record, "title", &mut problems).unwrap_or_default(),
            check_in_notes: text_field(record, "checkInNotes", &mut problems).unwrap_or_default(),
            start_time,
            break_periods,
            status: derived,
            project_id,
            tags,
        },
        problems,
    }
}

/// Removes `breakTime` from a history record. Absent, null or non-integer values yield `None`
/// so the caller recomputes them from the breaks.
fn take_cached_break_time(
    record: &mut Value,
    index: usize,
    problems: &mut Vec<MalformedPersistedState>,
) -> Option<Millis> {
    let raw = record.as_object_mut()?.remove("breakTime")?;
    match raw {
        Value::Null => None,
        Value::Number(number) if number.is_i64() => number.as_i64(),
        other => {
            problems.push(MalformedPersistedState::InvalidField {
                field: format!("timeEntries[{index}].breakTime"),
                value: other.to_string(),
            });
            None
        }
    }
}

fn recover_history(key: &str, raw: &str) -> Recovered<Vec<TimeEntry>> {
    let records: Vec<Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => {
            return Recovered {
                value: Vec::new(),
                problems: vec![MalformedPersistedState::Unparseable {
                    key: key.to_string(),
                    reason: err.to_string(),
                }],
            };
        }
    };

    let mut problems = Vec::new();
    let mut entries = Vec::with_capacity(records.len());
    for (index, mut record) in records.into_iter().enumerate() {
        let cached_break_time = take_cached_break_time(&mut record, index, &mut problems);
        match serde_json::from_value::<TimeEntry>(record) {
            Ok(mut entry) => {
                for period in entry.break_periods.iter_mut().filter(|p| p.is_open()) {
                    period.end = Some(entry.end_time);
                }
                entry.break_time = cached_break_time
                    .filter(|millis| *millis >= 0)
                    .unwrap_or_else(|| entry.recomputed_break_time());
                entries.push(entry);
            }
            Err(err) => problems.push(MalformedPersistedState::SkippedHistoryRecord {
                index,
                reason: err.to_string(),
            }),
        }
    }
    Recovered {
        value: entries,
        problems,
    }
}

fn report(user_id: &str, problems: &[MalformedPersistedState]) {
    for problem in problems {
        tracing::warn!(user_id, %problem, "repaired malformed persisted state");
    }
}

#[derive(Clone)]
pub struct TimeEntryRepository {
    store: Arc<dyn KeyValueStore>,
}

impl TimeEntryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load_current(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Recovered<Option<CurrentEntry>>, StorageError> {
        let key = active_time_entry_key(user_id);
        let Some(raw) = self.store.get(&key).await? else {
            return Ok(Recovered::clean(None));
        };
        let parsed = serde_json::from_str::<Value>(&raw).and_then(|value| match value {
            Value::Object(record) => Ok(record),
            other => Err(serde::de::Error::custom(format!(
                "expected an object, found {other}"
            ))),
        });
        let recovered = match parsed {
            Ok(record) => {
                let Recovered { value, problems } = recover_current_entry(user_id, &record, now);
                Recovered {
                    value: Some(value),
                    problems,
                }
            }
            Err(err) => Recovered {
                value: None,
                problems: vec![MalformedPersistedState::Unparseable {
                    key,
                    reason: err.to_string(),
                }],
            },
        };
        report(user_id, &recovered.problems);
        Ok(recovered)
    }

    pub async fn load_entries(
        &self,
        user_id: &str,
    ) -> Result<Recovered<Vec<TimeEntry>>, StorageError> {
        let key = time_entries_key(user_id);
        let Some(raw) = self.store.get(&key).await? else {
            return Ok(Recovered::clean(Vec::new()));
        };
        let recovered = recover_history(&key, &raw);
        report(user_id, &recovered.problems);
        Ok(recovered)
    }

    pub async fn load_state(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Recovered<TimeEntryState>, StorageError> {
        let current = self.load_current(user_id, now).await?;
        let entries = self.load_entries(user_id).await?;
        let mut problems = current.problems;
        problems.extend(entries.problems);
        Ok(Recovered {
            value: TimeEntryState::new(current.value, entries.value),
            problems,
        })
    }

    /// Writes the current entry, or removes the key when there is none.
    pub async fn save_current(
        &self,
        user_id: &str,
        current: Option<&CurrentEntry>,
    ) -> Result<(), StorageError> {
        let key = active_time_entry_key(user_id);
        match current {
            Some(entry) => {
                let json = serde_json::to_string(&PersistedCurrentEntry::from(entry))?;
                self.store.set(&key, json).await
            }
            None => self.store.remove(&key).await,
        }
    }

    pub async fn save_entries(&self, user_id: &str, entries: &[TimeEntry]) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries)?;
        self.store.set(&time_entries_key(user_id), json).await
    }
}

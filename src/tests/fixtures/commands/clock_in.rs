// Shared test fixture for the ClockIn command.

use crate::modules::time_entries::use_cases::clock_in::command::ClockIn;
use crate::tests::fixtures::at;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ClockInDto {
    pub time_entry_id: String,
    pub user_id: String,
    pub title: String,
    pub check_in_notes: String,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
}

pub struct ClockInBuilder {
    inner: ClockIn,
}

impl Default for ClockInBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClockInBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/clock_in.json").unwrap();
        let dto: ClockInDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: ClockIn {
                time_entry_id: dto.time_entry_id,
                user_id: dto.user_id,
                title: dto.title,
                check_in_notes: dto.check_in_notes,
                project_id: dto.project_id,
                tags: dto.tags,
                at: at(0),
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn check_in_notes(mut self, v: impl Into<String>) -> Self {
        self.inner.check_in_notes = v.into();
        self
    }

    pub fn project_id(mut self, v: Option<String>) -> Self {
        self.inner.project_id = v;
        self
    }

    pub fn tags(mut self, v: Vec<String>) -> Self {
        self.inner.tags = v;
        self
    }

    pub fn at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.at = v;
        self
    }

    pub fn build(self) -> ClockIn {
        self.inner
    }
}

#[cfg(test)]
mod clock_in_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ClockInBuilder::default().build();
        assert_eq!(built.time_entry_id, "te-fixed-0001");
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.title, "");
        assert_eq!(built.check_in_notes, "working");
        assert_eq!(built.project_id, None);
        assert_eq!(built.tags, vec!["Work"]);
        assert_eq!(built.at, at(0));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ClockInBuilder::new()
            .time_entry_id("tid-123")
            .user_id("uid-456")
            .title("standup")
            .check_in_notes("notes")
            .project_id(Some("p-1".into()))
            .tags(vec!["a".into(), "b".into()])
            .at(at(30))
            .build();

        assert_eq!(custom.time_entry_id, "tid-123");
        assert_eq!(custom.user_id, "uid-456");
        assert_eq!(custom.title, "standup");
        assert_eq!(custom.check_in_notes, "notes");
        assert_eq!(custom.project_id.as_deref(), Some("p-1"));
        assert_eq!(custom.tags, vec!["a", "b"]);
        assert_eq!(custom.at, at(30));
    }
}

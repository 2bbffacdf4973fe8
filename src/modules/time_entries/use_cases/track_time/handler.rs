// Session handler for one user's time tracking.
//
// Responsibilities
// - Hold the authoritative TimeEntryState behind a mutex. Transitions and reads share the lock.
// - For each command: decide, fold accepted events with evolve, write the result through to the
//   repository, then project the status.
// - Storage failures are logged and never fail the operation; the in-memory state carries on.

use crate::modules::time_entries::adapters::outbound::status_projector::StatusProjector;
use crate::modules::time_entries::adapters::outbound::time_entry_repository::TimeEntryRepository;
use crate::modules::time_entries::core::breaks::elapsed_time;
use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::evolve::evolve;
use crate::modules::time_entries::core::state::{
    CurrentEntry, SessionStatus, TimeEntry, TimeEntryState,
};
use crate::modules::time_entries::core::view::ClockView;
use crate::modules::time_entries::use_cases::clock_in::command::{ClockIn, ClockInRequest};
use crate::modules::time_entries::use_cases::clock_in::decide::decide_clock_in;
use crate::modules::time_entries::use_cases::clock_out::command::ClockOut;
use crate::modules::time_entries::use_cases::clock_out::decide::decide_clock_out;
use crate::modules::time_entries::use_cases::pause_time_entry::decide::decide_pause;
use crate::modules::time_entries::use_cases::resume_time_entry::decide::decide_resume;
use crate::modules::time_entries::use_cases::update_check_in_notes::decide::decide_update_check_in_notes;
use crate::shared::core::primitives::{Millis, format_duration};
use crate::shared::infrastructure::clock::Clock;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard, watch};
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] DecideError),

    #[error("location permission is required to clock in")]
    LocationRequired,

    #[error("unexpected: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub is_active: bool,
    pub is_paused: bool,
    pub elapsed_ms: Millis,
    pub elapsed: String,
    pub total_break_ms: Millis,
    pub current_entry: Option<CurrentEntry>,
}

pub struct TimeEntrySession {
    user_id: String,
    repository: TimeEntryRepository,
    clock: Arc<dyn Clock>,
    state: Mutex<TimeEntryState>,
    projector: StatusProjector,
    display: watch::Sender<String>,
}

impl TimeEntrySession {
    /// Restores the user's state from the repository. An unavailable store starts the session idle.
    pub async fn load(
        user_id: impl Into<String>,
        repository: TimeEntryRepository,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_id = user_id.into();
        let now = clock.now();
        let state = match repository.load_state(&user_id, now).await {
            Ok(recovered) => recovered.value,
            Err(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "time entries unavailable, starting idle");
                TimeEntryState::default()
            }
        };
        tracing::info!(
            user_id = %user_id,
            status = %state.status(),
            entries = state.entries.len(),
            "time entry session loaded"
        );
        let projector = StatusProjector::new(state.status());
        let (display, _) = watch::channel(format_duration(elapsed_time(state.current.as_ref(), now)));
        Self {
            user_id,
            repository,
            clock,
            state: Mutex::new(state),
            projector,
            display,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The coarse clock view. UI-owned fields are written through it as well.
    pub fn clock_view(&self) -> &StatusProjector {
        &self.projector
    }

    pub fn subscribe_display(&self) -> watch::Receiver<String> {
        self.display.subscribe()
    }

    /// Idle, unwatched, without UI drafts and with no transition in progress.
    pub fn is_dormant(&self) -> bool {
        self.display.receiver_count() == 0
            && !self.projector.is_watched()
            && self.projector.current() == ClockView::default()
            && self
                .state
                .try_lock()
                .is_ok_and(|state| state.current.is_none())
    }

    pub async fn clock_in(&self, request: ClockInRequest) -> Result<CurrentEntry, ApplicationError> {
        let user_id = self.user_id.clone();
        let state = self
            .execute("clock_in", move |state, now| {
                decide_clock_in(
                    state,
                    ClockIn {
                        time_entry_id: Uuid::now_v7().to_string(),
                        user_id,
                        title: request.title,
                        check_in_notes: request.check_in_notes,
                        project_id: request.project_id,
                        tags: request.tags,
                        at: now,
                    },
                )
            })
            .await?;
        current_of(&state)
    }

    pub async fn pause(&self) -> Result<CurrentEntry, ApplicationError> {
        let state = self.execute("pause", decide_pause).await?;
        current_of(&state)
    }

    pub async fn resume(&self) -> Result<CurrentEntry, ApplicationError> {
        let state = self.execute("resume", decide_resume).await?;
        current_of(&state)
    }

    /// Pauses an active entry, resumes a paused one.
    pub async fn toggle_pause(&self) -> Result<CurrentEntry, ApplicationError> {
        let state = self
            .execute("toggle_pause", |state, now| match state.status() {
                SessionStatus::Paused => decide_resume(state, now),
                _ => decide_pause(state, now),
            })
            .await?;
        current_of(&state)
    }

    pub async fn update_check_in_notes(
        &self,
        notes: impl Into<String>,
    ) -> Result<CurrentEntry, ApplicationError> {
        let notes = notes.into();
        let state = self
            .execute("update_check_in_notes", move |state, _| {
                decide_update_check_in_notes(state, notes)
            })
            .await?;
        current_of(&state)
    }

    pub async fn clock_out(
        &self,
        check_out_notes: impl Into<String>,
    ) -> Result<TimeEntry, ApplicationError> {
        let check_out_notes = check_out_notes.into();
        let state = self
            .execute("clock_out", move |state, now| {
                decide_clock_out(
                    state,
                    ClockOut {
                        check_out_notes,
                        at: now,
                    },
                )
            })
            .await?;
        state
            .entries
            .first()
            .cloned()
            .ok_or_else(|| ApplicationError::Unexpected("clock-out archived no entry".into()))
    }

    pub async fn status(&self) -> SessionStatus {
        self.state.lock().await.status()
    }

    pub async fn current_entry(&self) -> Option<CurrentEntry> {
        self.state.lock().await.current.clone()
    }

    /// Completed entries, newest first.
    pub async fn entries(&self) -> Vec<TimeEntry> {
        self.state.lock().await.entries.clone()
    }

    pub async fn elapsed_time(&self) -> Millis {
        let state = self.state.lock().await;
        elapsed_time(state.current.as_ref(), self.clock.now())
    }

    pub async fn total_break_time(&self) -> Millis {
        let state = self.state.lock().await;
        let now = self.clock.now();
        state
            .current
            .as_ref()
            .map_or(0, |entry| entry.total_break_time(now))
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        let now = self.clock.now();
        let status = state.status();
        let elapsed_ms = elapsed_time(state.current.as_ref(), now);
        SessionSnapshot {
            status,
            is_active: status.is_active(),
            is_paused: status.is_paused(),
            elapsed_ms,
            elapsed: format_duration(elapsed_ms),
            total_break_ms: state
                .current
                .as_ref()
                .map_or(0, |entry| entry.total_break_time(now)),
            current_entry: state.current.clone(),
        }
    }

    /// Recomputes the elapsed time for display. Reads only.
    pub async fn tick(&self) -> Millis {
        let elapsed = self.elapsed_time().await;
        let formatted = format_duration(elapsed);
        self.display.send_if_modified(|shown| {
            if *shown == formatted {
                return false;
            }
            *shown = formatted;
            true
        });
        elapsed
    }

    async fn execute<F>(
        &self,
        operation: &'static str,
        decide: F,
    ) -> Result<MutexGuard<'_, TimeEntryState>, ApplicationError>
    where
        F: FnOnce(&TimeEntryState, DateTime<Utc>) -> Decision,
    {
        let mut state = self.state.lock().await;
        let now = self.clock.now();
        let events = match decide(&*state, now) {
            Decision::Rejected { reason } => {
                tracing::info!(user_id = %self.user_id, operation, %reason, "transition rejected");
                return Err(reason.into());
            }
            Decision::Accepted { events } => events,
        };
        if events.is_empty() {
            tracing::debug!(user_id = %self.user_id, operation, "transition left the state unchanged");
            return Ok(state);
        }

        let archives = events
            .iter()
            .any(|event| matches!(event, TimeEntryEvent::ClockedOutV1(_)));
        for event in &events {
            tracing::debug!(user_id = %self.user_id, event = event.name(), "applying event");
        }
        let next = events.into_iter().fold(std::mem::take(&mut *state), evolve);
        *state = next;

        self.persist(&state, archives).await;
        self.projector.project(state.status());
        self.display
            .send_replace(format_duration(elapsed_time(state.current.as_ref(), now)));
        tracing::info!(
            user_id = %self.user_id,
            operation,
            status = %state.status(),
            "transition applied"
        );
        Ok(state)
    }

    async fn persist(&self, state: &TimeEntryState, archives: bool) {
        if archives {
            if let Err(err) = self
                .repository
                .save_entries(&self.user_id, &state.entries)
                .await
            {
                tracing::warn!(user_id = %self.user_id, error = %err, "failed to persist time entries");
            }
        }
        if let Err(err) = self
            .repository
            .save_current(&self.user_id, state.current.as_ref())
            .await
        {
            tracing::warn!(user_id = %self.user_id, error = %err, "failed to persist current time entry");
        }
    }
}

fn current_of(state: &TimeEntryState) -> Result<CurrentEntry, ApplicationError> {
    state
        .current
        .clone()
        .ok_or_else(|| ApplicationError::Unexpected("no current entry after transition".into()))
}

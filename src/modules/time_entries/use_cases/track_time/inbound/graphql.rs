use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::core::state::{BreakPeriod, CurrentEntry, EntryStatus};
use crate::modules::time_entries::use_cases::clock_in::command::ClockInRequest;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::graphql::GqlTimeEntry;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::track_time::handler::SessionSnapshot;
use crate::modules::time_entries::use_cases::track_time::location::{
    LocationPermission, clock_in_with_location,
};
use crate::shared::core::primitives::to_iso_string;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlBreakPeriod {
    pub start: String,
    pub end: Option<String>,
}

impl From<&BreakPeriod> for GqlBreakPeriod {
    fn from(period: &BreakPeriod) -> Self {
        Self {
            start: to_iso_string(period.start),
            end: period.end.map(to_iso_string),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCurrentEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub title: String,
    pub check_in_notes: String,
    pub start_time: String,
    pub break_periods: Vec<GqlBreakPeriod>,
    pub paused: bool,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
}

impl From<CurrentEntry> for GqlCurrentEntry {
    fn from(entry: CurrentEntry) -> Self {
        Self {
            break_periods: entry.break_periods.iter().map(GqlBreakPeriod::from).collect(),
            paused: entry.status == EntryStatus::Paused,
            start_time: to_iso_string(entry.start_time),
            time_entry_id: entry.id,
            user_id: entry.user_id,
            title: entry.title,
            check_in_notes: entry.check_in_notes,
            project_id: entry.project_id,
            tags: entry.tags,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlClockStatus {
    pub status: String,
    pub is_active: bool,
    pub is_paused: bool,
    pub elapsed_ms: i64,
    pub elapsed: String,
    pub total_break_ms: i64,
    pub current_entry: Option<GqlCurrentEntry>,
}

impl From<SessionSnapshot> for GqlClockStatus {
    fn from(s: SessionSnapshot) -> Self {
        Self {
            status: s.status.to_string(),
            is_active: s.is_active,
            is_paused: s.is_paused,
            elapsed_ms: s.elapsed_ms,
            elapsed: s.elapsed,
            total_break_ms: s.total_break_ms,
            current_entry: s.current_entry.map(Into::into),
        }
    }
}

#[derive(Default)]
pub struct ClockQuery;

#[Object]
impl ClockQuery {
    async fn clock_status(&self, context: &Context<'_>, user_id: String) -> GqlClockStatus {
        let state = context.data_unchecked::<AppState>();
        state.sessions.session(&user_id).await.snapshot().await.into()
    }
}

#[derive(Default)]
pub struct ClockMutation;

#[Object]
impl ClockMutation {
    async fn clock_in(
        &self,
        context: &Context<'_>,
        user_id: String,
        check_in_notes: Option<String>,
        title: Option<String>,
        project_id: Option<String>,
        tags: Option<Vec<String>>,
        location_permission: Option<LocationPermission>,
    ) -> GqlResult<GqlCurrentEntry> {
        let state = context.data_unchecked::<AppState>();
        let session = state.sessions.session(&user_id).await;
        let request = ClockInRequest {
            check_in_notes: check_in_notes.unwrap_or_default(),
            title: title.unwrap_or_default(),
            project_id,
            tags: tags.unwrap_or_default(),
        };
        let entry = clock_in_with_location(
            &session,
            state.require_location,
            location_permission.unwrap_or_default(),
            request,
        )
        .await?;
        Ok(entry.into())
    }

    async fn pause(&self, context: &Context<'_>, user_id: String) -> GqlResult<GqlCurrentEntry> {
        let state = context.data_unchecked::<AppState>();
        let entry = state.sessions.session(&user_id).await.pause().await?;
        Ok(entry.into())
    }

    async fn resume(&self, context: &Context<'_>, user_id: String) -> GqlResult<GqlCurrentEntry> {
        let state = context.data_unchecked::<AppState>();
        let entry = state.sessions.session(&user_id).await.resume().await?;
        Ok(entry.into())
    }

    async fn update_notes(
        &self,
        context: &Context<'_>,
        user_id: String,
        notes: String,
    ) -> GqlResult<GqlCurrentEntry> {
        let state = context.data_unchecked::<AppState>();
        let session = state.sessions.session(&user_id).await;
        let entry = session.update_check_in_notes(notes.clone()).await?;
        session.clock_view().set_check_in_note(notes);
        Ok(entry.into())
    }

    async fn clock_out(
        &self,
        context: &Context<'_>,
        user_id: String,
        check_out_notes: Option<String>,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let session = state.sessions.session(&user_id).await;
        let notes = check_out_notes.unwrap_or_default();
        let entry = session.clock_out(notes.clone()).await?;
        session.clock_view().set_check_out_note(notes);
        Ok(TimeEntryView::from(&entry).into())
    }
}

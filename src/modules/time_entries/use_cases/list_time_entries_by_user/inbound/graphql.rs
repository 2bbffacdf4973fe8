use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::DEFAULT_PAGE_SIZE;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub check_in_notes: Option<String>,
    pub check_out_notes: Option<String>,
    pub break_time_ms: i64,
    pub worked_ms: i64,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
}

impl From<TimeEntryView> for GqlTimeEntry {
    fn from(v: TimeEntryView) -> Self {
        Self {
            time_entry_id: v.time_entry_id,
            user_id: v.user_id,
            title: v.title,
            start_time: v.start_time,
            end_time: v.end_time,
            check_in_notes: v.check_in_notes,
            check_out_notes: v.check_out_notes,
            break_time_ms: v.break_time_ms,
            worked_ms: v.worked_ms,
            project_id: v.project_id,
            tags: v.tags,
        }
    }
}

#[derive(Default)]
pub struct TimeEntriesQuery;

#[Object]
impl TimeEntriesQuery {
    async fn time_entries(
        &self,
        context: &Context<'_>,
        user_id: String,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_desc: Option<bool>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .queries
            .list_by_user_id(
                &user_id,
                offset.unwrap_or(0).max(0) as u64,
                limit.unwrap_or(DEFAULT_PAGE_SIZE as i64).max(0) as u64,
                sort_desc.unwrap_or(true),
            )
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}

use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::use_cases::summarize_time_entries::summary::TimeEntrySummary;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeEntrySummary {
    pub entry_count: u64,
    pub total_worked_ms: i64,
    pub total_break_ms: i64,
    pub worked_this_week_ms: i64,
    pub days_worked: u64,
    pub average_daily_worked_ms: i64,
}

impl From<TimeEntrySummary> for GqlTimeEntrySummary {
    fn from(s: TimeEntrySummary) -> Self {
        Self {
            entry_count: s.entry_count,
            total_worked_ms: s.total_worked_ms,
            total_break_ms: s.total_break_ms,
            worked_this_week_ms: s.worked_this_week_ms,
            days_worked: s.days_worked,
            average_daily_worked_ms: s.average_daily_worked_ms,
        }
    }
}

#[derive(Default)]
pub struct SummaryQuery;

#[Object]
impl SummaryQuery {
    async fn summary(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<GqlTimeEntrySummary> {
        let state = context.data_unchecked::<AppState>();
        let summary = state.queries.summarize_by_user_id(&user_id).await?;
        Ok(summary.into())
    }
}

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::DEFAULT_PAGE_SIZE;
use crate::shell::identity::UserId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListTimeEntriesParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Query(params): Query<ListTimeEntriesParams>,
) -> impl IntoResponse {
    match state
        .queries
        .list_by_user_id(
            &user_id,
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
            params.sort_desc.unwrap_or(true),
        )
        .await
    {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => {
            tracing::error!(user_id = %user_id, error = %err, "listing time entries failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

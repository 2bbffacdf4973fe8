use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::identity::UserId;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, UserId(user_id): UserId) -> impl IntoResponse {
    match state.queries.summarize_by_user_id(&user_id).await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => {
            tracing::error!(user_id = %user_id, error = %err, "summarizing time entries failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

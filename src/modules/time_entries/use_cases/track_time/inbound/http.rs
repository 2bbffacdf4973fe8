use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::clock_in::command::ClockInRequest;
use crate::modules::time_entries::use_cases::track_time::handler::ApplicationError;
use crate::modules::time_entries::use_cases::track_time::location::{
    LocationPermission, clock_in_with_location,
};
use crate::shell::identity::UserId;
use crate::shell::state::AppState;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::InvalidTransition(_) => StatusCode::CONFLICT,
            ApplicationError::LocationRequired => StatusCode::FORBIDDEN,
            ApplicationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClockInBody {
    pub check_in_notes: String,
    pub title: String,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
    pub location_permission: LocationPermission,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNotesBody {
    pub notes: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClockOutBody {
    pub check_out_notes: String,
}

pub async fn clock_in(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(body): Json<ClockInBody>,
) -> Result<impl IntoResponse, ApplicationError> {
    let session = state.sessions.session(&user_id).await;
    let request = ClockInRequest {
        check_in_notes: body.check_in_notes,
        title: body.title,
        project_id: body.project_id,
        tags: body.tags,
    };
    let entry = clock_in_with_location(
        &session,
        state.require_location,
        body.location_permission,
        request,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn pause(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApplicationError> {
    let entry = state.sessions.session(&user_id).await.pause().await?;
    Ok(Json(entry))
}

pub async fn resume(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApplicationError> {
    let entry = state.sessions.session(&user_id).await.resume().await?;
    Ok(Json(entry))
}

pub async fn toggle_pause(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApplicationError> {
    let entry = state.sessions.session(&user_id).await.toggle_pause().await?;
    Ok(Json(entry))
}

pub async fn update_notes(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(body): Json<UpdateNotesBody>,
) -> Result<impl IntoResponse, ApplicationError> {
    let session = state.sessions.session(&user_id).await;
    let entry = session.update_check_in_notes(body.notes.clone()).await?;
    session.clock_view().set_check_in_note(body.notes);
    Ok(Json(entry))
}

pub async fn clock_out(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(body): Json<ClockOutBody>,
) -> Result<impl IntoResponse, ApplicationError> {
    let session = state.sessions.session(&user_id).await;
    let entry = session.clock_out(body.check_out_notes.clone()).await?;
    session.clock_view().set_check_out_note(body.check_out_notes);
    Ok(Json(entry))
}

pub async fn status(State(state): State<AppState>, UserId(user_id): UserId) -> impl IntoResponse {
    Json(state.sessions.session(&user_id).await.snapshot().await)
}

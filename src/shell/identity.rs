// Caller identity for the HTTP surface.
//
// Boundaries
// - Authentication is not done here. The user id is taken as given from the `x-user-id` header.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());
        match user_id {
            Some(user_id) => Ok(UserId(user_id.to_string())),
            None => Err((
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": format!("missing {USER_ID_HEADER} header") })),
            )
                .into_response()),
        }
    }
}

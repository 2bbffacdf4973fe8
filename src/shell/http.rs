use axum::{
    Extension, Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::http as list_http;
use crate::modules::time_entries::use_cases::summarize_time_entries::inbound::http as summary_http;
use crate::modules::time_entries::use_cases::track_time::inbound::http as track_http;
use crate::shell::graphql::{GRAPHQL_PATH, graphiql, graphql, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = schema(state.clone());
    Router::new()
        .route("/clock-in", post(track_http::clock_in))
        .route("/pause", post(track_http::pause))
        .route("/resume", post(track_http::resume))
        .route("/toggle-pause", post(track_http::toggle_pause))
        .route("/notes", put(track_http::update_notes))
        .route("/clock-out", post(track_http::clock_out))
        .route("/status", get(track_http::status))
        .route("/time-entries", get(list_http::handle))
        .route("/time-entries/summary", get(summary_http::handle))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

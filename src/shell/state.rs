use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::track_time::registry::SessionRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn TimeEntryQueries + Send + Sync>,
    pub sessions: Arc<SessionRegistry>,
    pub require_location: bool,
}

impl AppState {
    pub fn new(sessions: Arc<SessionRegistry>, require_location: bool) -> Self {
        Self {
            queries: sessions.clone(),
            sessions,
            require_location,
        }
    }
}

// Shared test fixtures, compiled into the crate only under cfg(test).

pub mod commands {
    pub mod clock_in;
}
pub mod events {
    pub mod clocked_in_v1;
}
pub mod entries;

pub use commands::clock_in::ClockInBuilder;
pub use entries::{completed_entry, current_entry};
pub use events::clocked_in_v1::make_clocked_in_v1_event;

use crate::modules::time_entries::adapters::outbound::time_entry_repository::TimeEntryRepository;
use crate::modules::time_entries::use_cases::track_time::handler::TimeEntrySession;
use crate::modules::time_entries::use_cases::track_time::registry::SessionRegistry;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::clock::manual::ManualClock;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shell::state::AppState;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

/// 2023-11-14T22:13:20.000Z
pub const BASE_MILLIS: i64 = 1_700_000_000_000;

/// The instant `secs` seconds after BASE_MILLIS.
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(BASE_MILLIS + secs * 1_000).unwrap()
}

/// An idle session on an in-memory store, with its clock.
pub async fn session() -> (TimeEntrySession, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::at_millis(BASE_MILLIS));
    let repository = TimeEntryRepository::new(Arc::new(InMemoryKeyValueStore::new()));
    let session = TimeEntrySession::load("user-fixed-0001", repository, clock.clone()).await;
    (session, clock)
}

pub fn app_state(clock: Arc<dyn Clock>, require_location: bool) -> AppState {
    let repository = TimeEntryRepository::new(Arc::new(InMemoryKeyValueStore::new()));
    AppState::new(
        Arc::new(SessionRegistry::new(repository, clock)),
        require_location,
    )
}

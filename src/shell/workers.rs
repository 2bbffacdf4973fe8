// Background display ticker.
//
// Responsibilities
// - Every interval, recompute the elapsed time of each loaded session and publish it on the
//   session's display channel.
// - Then drop dormant sessions from the registry.
//
// Boundaries
// - The ticker never issues a transition.

use crate::modules::time_entries::use_cases::track_time::registry::SessionRegistry;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

pub fn spawn_ticker(sessions: Arc<SessionRegistry>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            tick_all(&sessions).await;
            sessions.evict_dormant().await;
        }
    })
}

pub async fn tick_all(sessions: &SessionRegistry) -> usize {
    let loaded = sessions.loaded().await;
    for session in &loaded {
        let elapsed = session.tick().await;
        tracing::trace!(user_id = %session.user_id(), elapsed, "tick");
    }
    loaded.len()
}

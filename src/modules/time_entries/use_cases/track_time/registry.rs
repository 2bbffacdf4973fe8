// One TimeEntrySession per user id, loaded lazily from the repository.
//
// Responsibilities
// - Hand out the same session to every caller for a given user. Loading happens outside the
//   map lock; when two callers race, the first insert wins.
// - Evict dormant sessions so the map only holds users with something in flight.
// - Serve the history queries from the sessions, so in-memory history stays authoritative
//   when storage is failing.

use crate::modules::time_entries::adapters::outbound::time_entry_repository::TimeEntryRepository;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::list_page;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::summarize_time_entries::summary::{
    TimeEntrySummary, summarize,
};
use crate::modules::time_entries::use_cases::track_time::handler::TimeEntrySession;
use crate::shared::infrastructure::clock::Clock;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct SessionRegistry {
    repository: TimeEntryRepository,
    clock: Arc<dyn Clock>,
    sessions: RwLock<HashMap<String, Arc<TimeEntrySession>>>,
}

impl SessionRegistry {
    pub fn new(repository: TimeEntryRepository, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn session(&self, user_id: &str) -> Arc<TimeEntrySession> {
        if let Some(session) = self.sessions.read().await.get(user_id) {
            return session.clone();
        }
        let loaded = Arc::new(
            TimeEntrySession::load(user_id, self.repository.clone(), self.clock.clone()).await,
        );
        self.sessions
            .write()
            .await
            .entry(user_id.to_string())
            .or_insert(loaded)
            .clone()
    }

    /// Drops sessions that are idle, unwatched and not held by any caller. Their state is
    /// already persisted, so the next request reloads it. Returns how many were dropped.
    pub async fn evict_dormant(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| Arc::strong_count(session) > 1 || !session.is_dormant());
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "evicted dormant sessions");
        }
        evicted
    }

    /// Sessions loaded so far.
    pub async fn loaded(&self) -> Vec<Arc<TimeEntrySession>> {
        self.sessions.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl TimeEntryQueries for SessionRegistry {
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_start_time_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        let entries = self.session(user_id).await.entries().await;
        Ok(list_page(&entries, offset, limit, sort_by_start_time_desc))
    }

    async fn summarize_by_user_id(&self, user_id: &str) -> anyhow::Result<TimeEntrySummary> {
        let entries = self.session(user_id).await.entries().await;
        Ok(summarize(&entries, self.clock.now()))
    }
}

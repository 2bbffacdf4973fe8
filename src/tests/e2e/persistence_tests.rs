use crate::modules::time_entries::adapters::outbound::time_entry_repository::{
    TimeEntryRepository, active_time_entry_key,
};
use crate::modules::time_entries::core::state::{EntryStatus, SessionStatus};
use crate::modules::time_entries::use_cases::clock_in::command::ClockInRequest;
use crate::modules::time_entries::use_cases::track_time::handler::TimeEntrySession;
use crate::shared::infrastructure::clock::Clock;
use crate::shared::infrastructure::clock::manual::ManualClock;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shared::infrastructure::key_value_store::file_system::FileKeyValueStore;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::tests::fixtures::BASE_MILLIS;
use std::sync::Arc;

#[tokio::test]
async fn restores_a_paused_entry_in_a_new_session() {
    let clock = Arc::new(ManualClock::at_millis(BASE_MILLIS));
    let store = Arc::new(InMemoryKeyValueStore::new());
    let repository = TimeEntryRepository::new(store.clone());

    let first = TimeEntrySession::load("u-1", repository.clone(), clock.clone()).await;
    first
        .clock_in(ClockInRequest::with_notes("working"))
        .await
        .unwrap();
    clock.advance_secs(10);
    first.pause().await.unwrap();
    clock.advance_secs(5);
    first.resume().await.unwrap();
    clock.advance_secs(5);
    let before = first.pause().await.unwrap();

    let second = TimeEntrySession::load("u-1", repository, clock.clone()).await;
    let after = second.current_entry().await.unwrap();

    assert_eq!(after.start_time, before.start_time);
    assert_eq!(after.break_periods, before.break_periods);
    assert_eq!(after.status, EntryStatus::Paused);
    assert_eq!(second.status().await, SessionStatus::Paused);

    clock.advance_secs(2);
    second.resume().await.unwrap();
    clock.advance_secs(3);
    let completed = second.clock_out("").await.unwrap();
    assert_eq!(completed.break_time, 7_000);
    assert_eq!(completed.worked_duration(), 18_000);
}

#[tokio::test]
async fn loads_an_entry_with_an_unreadable_start_time_as_started_now() {
    let clock = Arc::new(ManualClock::at_millis(BASE_MILLIS));
    let store = Arc::new(InMemoryKeyValueStore::new());
    store
        .set(
            &active_time_entry_key("u-1"),
            r#"{"id":"te-1","userId":"u-1","checkInNotes":"x","startTime":"not-a-date","breakPeriods":[],"status":"active"}"#.to_string(),
        )
        .await
        .unwrap();

    let session =
        TimeEntrySession::load("u-1", TimeEntryRepository::new(store), clock.clone()).await;

    let entry = session.current_entry().await.unwrap();
    assert_eq!(entry.start_time, clock.now());
    assert_eq!(session.status().await, SessionStatus::Active);
    assert_eq!(session.elapsed_time().await, 0);

    clock.advance_secs(4);
    assert_eq!(session.elapsed_time().await, 4_000);
}

#[tokio::test]
async fn loads_an_unparseable_entry_as_idle() {
    let clock = Arc::new(ManualClock::at_millis(BASE_MILLIS));
    let store = Arc::new(InMemoryKeyValueStore::new());
    store
        .set(&active_time_entry_key("u-1"), "{not json".to_string())
        .await
        .unwrap();

    let session = TimeEntrySession::load("u-1", TimeEntryRepository::new(store), clock).await;

    assert_eq!(session.status().await, SessionStatus::Idle);
    session.clock_in(ClockInRequest::default()).await.unwrap();
    assert_eq!(session.status().await, SessionStatus::Active);
}

#[tokio::test]
async fn keeps_history_on_disk_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(ManualClock::at_millis(BASE_MILLIS));

    {
        let store = Arc::new(FileKeyValueStore::open(dir.path()).await.unwrap());
        let session =
            TimeEntrySession::load("u-1", TimeEntryRepository::new(store), clock.clone()).await;
        session.clock_in(ClockInRequest::default()).await.unwrap();
        clock.advance_secs(60);
        session.clock_out("first").await.unwrap();
        session.clock_in(ClockInRequest::with_notes("second")).await.unwrap();
        clock.advance_secs(30);
    }

    let store = Arc::new(FileKeyValueStore::open(dir.path()).await.unwrap());
    let session =
        TimeEntrySession::load("u-1", TimeEntryRepository::new(store), clock.clone()).await;

    let entries = session.entries().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].check_out_notes.as_deref(), Some("first"));
    assert_eq!(entries[0].worked_duration(), 60_000);
    assert_eq!(session.status().await, SessionStatus::Active);
    assert_eq!(session.elapsed_time().await, 30_000);
}

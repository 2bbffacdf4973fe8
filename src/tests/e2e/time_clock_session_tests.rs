use crate::modules::time_entries::core::state::SessionStatus;
use crate::modules::time_entries::use_cases::clock_in::command::ClockInRequest;
use crate::tests::fixtures::session;

#[tokio::test]
async fn tracks_a_session_with_one_break() {
    let (session, clock) = session().await;

    session
        .clock_in(ClockInRequest::with_notes("working"))
        .await
        .unwrap();
    clock.advance_secs(10);
    session.pause().await.unwrap();
    clock.advance_secs(5);
    session.resume().await.unwrap();
    clock.advance_secs(3);
    let completed = session.clock_out("done").await.unwrap();

    assert_eq!(completed.break_time, 5_000);
    assert_eq!(completed.wall_clock_duration(), 18_000);
    assert_eq!(completed.worked_duration(), 13_000);
    assert_eq!(completed.check_in_notes.as_deref(), Some("working"));
    assert_eq!(completed.check_out_notes.as_deref(), Some("done"));
    assert_eq!(session.status().await, SessionStatus::Idle);
    assert_eq!(session.entries().await, vec![completed]);
}

#[tokio::test]
async fn resuming_an_active_entry_changes_nothing() {
    let (session, _) = session().await;
    let started = session.clock_in(ClockInRequest::default()).await.unwrap();

    let resumed = session.resume().await.unwrap();

    assert_eq!(resumed, started);
    assert_eq!(session.status().await, SessionStatus::Active);
    assert!(resumed.break_periods.is_empty());
}

#[tokio::test]
async fn pausing_a_paused_entry_keeps_the_original_break() {
    let (session, clock) = session().await;
    session.clock_in(ClockInRequest::default()).await.unwrap();
    clock.advance_secs(2);
    let paused = session.pause().await.unwrap();
    clock.advance_secs(2);

    let again = session.pause().await.unwrap();

    assert_eq!(again, paused);
    assert_eq!(again.break_periods.len(), 1);
}

#[tokio::test]
async fn elapsed_time_grows_while_active_and_holds_while_paused() {
    let (session, clock) = session().await;
    session.clock_in(ClockInRequest::default()).await.unwrap();

    let mut previous = session.elapsed_time().await;
    for _ in 0..5 {
        clock.advance_secs(1);
        let current = session.elapsed_time().await;
        assert!(current >= previous);
        previous = current;
    }
    assert_eq!(previous, 5_000);

    session.pause().await.unwrap();
    for _ in 0..5 {
        clock.advance_secs(1);
        assert_eq!(session.elapsed_time().await, 5_000);
    }
    assert_eq!(session.total_break_time().await, 5_000);
}

#[tokio::test]
async fn keeps_one_closed_break_per_pause_and_resume_pair() {
    let (session, clock) = session().await;
    session.clock_in(ClockInRequest::default()).await.unwrap();

    for pairs in 1..=4 {
        clock.advance_secs(7);
        session.toggle_pause().await.unwrap();
        clock.advance_secs(3);
        let entry = session.toggle_pause().await.unwrap();

        let closed = entry.break_periods.iter().filter(|p| !p.is_open()).count();
        let open = entry.break_periods.iter().filter(|p| p.is_open()).count();
        assert_eq!(closed, pairs);
        assert_eq!(open, 0);
    }

    clock.advance_secs(1);
    session.pause().await.unwrap();
    clock.advance_secs(4);
    let completed = session.clock_out("").await.unwrap();

    assert!(completed.break_periods.iter().all(|p| !p.is_open()));
    assert_eq!(completed.break_periods.len(), 5);
    assert_eq!(completed.break_time, 16_000);
    assert_eq!(completed.check_out_notes, None);
}

#[tokio::test]
async fn editing_notes_only_touches_the_current_entry() {
    let (session, _) = session().await;
    session
        .clock_in(ClockInRequest::with_notes("first"))
        .await
        .unwrap();

    let updated = session.update_check_in_notes("second").await.unwrap();

    assert_eq!(updated.check_in_notes, "second");
    assert_eq!(session.status().await, SessionStatus::Active);
    assert!(updated.break_periods.is_empty());
}

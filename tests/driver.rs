mod common;
use common::*;

use folio::animation::api;
use folio::prelude::*;
use folio::sequencer::ScriptedChallenges;
use std::time::Duration;
use tokio::time::{Instant, sleep};

fn scenario() -> Sequencer {
    Sequencer::new(scenario_steps(), TickPolicy::PerStep).unwrap()
}

fn assert_elapsed(started: Instant, expected_ms: u64) {
    let elapsed = started.elapsed();
    assert!(
        elapsed >= Duration::from_millis(expected_ms)
            && elapsed < Duration::from_millis(expected_ms + 50),
        "expected ~{}ms, got {:?}",
        expected_ms,
        elapsed
    );
}

#[tokio::test(start_paused = true)]
async fn test_driver_publishes_ticks_on_schedule() {
    let started = Instant::now();
    let sequencer = api::sequencer_with(ScriptedChallenges::new(vec![
        Challenge::Caching,
        Challenge::Recovery,
    ]))
    .unwrap();
    let handle = SequencerDriver::spawn(sequencer);
    let mut updates = handle.subscribe();
    assert_eq!(updates.borrow().step_id, "request_init");

    updates.changed().await.unwrap();
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.step_id, "validation");
    assert_eq!(snapshot.challenge, Some(Challenge::Caching));
    assert_elapsed(started, 4000);

    updates.changed().await.unwrap();
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.step_id, "processing");
    assert_eq!(snapshot.challenge, Some(Challenge::Recovery));
    assert_elapsed(started, 8000);

    assert_eq!(handle.snapshot(), snapshot);
}

#[tokio::test(start_paused = true)]
async fn test_pause_cancels_scheduled_tick() {
    let started = Instant::now();
    let handle = SequencerDriver::spawn(scenario());
    let mut updates = handle.subscribe();

    sleep(Duration::from_millis(500)).await;
    assert!(handle.send(Command::Pause));
    updates.changed().await.unwrap();
    assert!(!updates.borrow_and_update().playing);

    sleep(Duration::from_secs(10)).await;
    assert!(!updates.has_changed().unwrap());
    assert_eq!(handle.snapshot().step_id, "A");

    // Resuming waits a full step from the moment of resumption.
    assert!(handle.send(Command::TogglePlay));
    updates.changed().await.unwrap();
    assert!(updates.borrow_and_update().playing);

    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().step_id, "B");
    assert_elapsed(started, 11_500);
}

#[tokio::test(start_paused = true)]
async fn test_error_override_freezes_driver() {
    let handle = SequencerDriver::spawn(scenario());
    let mut updates = handle.subscribe();

    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().step_id, "B");

    assert!(handle.send(Command::ForceError));
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().phase, Phase::ErrorOverride);

    sleep(Duration::from_secs(30)).await;
    assert!(!updates.has_changed().unwrap());
    assert_eq!(handle.snapshot().step_id, "B");

    assert!(handle.send(Command::ToggleError));
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().phase, Phase::Running);

    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().step_id, "C");
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_returns_torn_down_sequencer() {
    let mut handle = SequencerDriver::spawn(scenario());
    sleep(Duration::from_millis(2500)).await;

    let sequencer = handle.shutdown().await.unwrap();
    assert!(sequencer.is_torn_down());
    assert_eq!(sequencer.current_step().id, "C");
    assert_eq!(sequencer.next_deadline(), None);

    assert!(handle.shutdown().await.is_none());
    assert!(!handle.send(Command::Play));
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_stops_driver() {
    let handle = SequencerDriver::spawn(scenario());
    let mut updates = handle.subscribe();

    drop(handle);
    assert!(updates.changed().await.is_err());
}

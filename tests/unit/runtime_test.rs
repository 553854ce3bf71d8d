//! Tests for tokio spawner and clocks

use std::time::Duration;

use cafe_seating::core::{Clock, CompletionFlag, Spawn};
use cafe_seating::runtime::{SimulatedClock, TokioClock, TokioSpawner};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send(123).unwrap();
    });

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[tokio::test(start_paused = true)]
async fn test_tokio_clock_unit_scaling() {
    let clock = TokioClock::current(Duration::from_millis(250));
    assert_eq!(clock.unit(), Duration::from_millis(250));

    let flag = CompletionFlag::new();
    clock.start_timer(4, flag.clone());
    tokio::time::sleep(Duration::from_millis(900)).await;
    assert!(!flag.is_set());
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(flag.is_set());
    assert_eq!(clock.now(), 4);
}

#[tokio::test]
async fn test_simulated_clock_pause_fires_timers() {
    let clock = SimulatedClock::new();
    let flag = CompletionFlag::new();
    clock.start_timer(2, flag.clone());
    clock.pause(1).await;
    assert!(!flag.is_set());
    clock.pause(1).await;
    assert!(flag.is_set());
    assert_eq!(clock.now(), 2);
}

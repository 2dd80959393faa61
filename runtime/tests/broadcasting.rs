//! Integration tests for Store action broadcasting
//!
//! Views re-render by watching the action broadcast, so every reduced
//! action (sent directly or fed back by an effect) must reach observers
//! in the order it was applied.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use postboard_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use postboard_runtime::{Store, StoreConfig, StoreError};
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum TestAction {
    /// Bump the counter directly
    Bump,
    /// Bump now, then bump again from an effect
    BumpTwice,
    /// Counter reached its final value
    Settled { value: u32 },
}

#[derive(Debug, Clone, Default)]
struct TestState {
    counter: u32,
}

#[derive(Clone)]
struct TestEnvironment;

#[derive(Clone)]
struct TestReducer;

impl Reducer for TestReducer {
    type State = TestState;
    type Action = TestAction;
    type Environment = TestEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TestAction::Bump => {
                state.counter += 1;
                smallvec![Effect::None]
            },
            TestAction::BumpTwice => {
                state.counter += 1;
                let value = state.counter + 1;
                smallvec![Effect::future(async move {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    Some(TestAction::Settled { value })
                })]
            },
            TestAction::Settled { value } => {
                state.counter = value;
                smallvec![Effect::None]
            },
        }
    }
}

fn new_store() -> Store<TestState, TestAction, TestEnvironment, TestReducer> {
    Store::new(TestState::default(), TestReducer, TestEnvironment)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_observer_sees_direct_and_fed_back_actions() {
    let store = new_store();
    let mut rx = store.subscribe_actions();

    let mut handle = store.send(TestAction::BumpTwice).await.unwrap();
    handle
        .wait_with_timeout(Duration::from_secs(1))
        .await
        .unwrap();

    assert_eq!(rx.recv().await.unwrap(), TestAction::BumpTwice);
    assert_eq!(rx.recv().await.unwrap(), TestAction::Settled { value: 2 });
    assert_eq!(store.state(|s| s.counter).await, 2);
}

#[tokio::test]
async fn test_every_observer_gets_its_own_copy() {
    let store = new_store();
    let mut first = store.subscribe_actions();
    let mut second = store.subscribe_actions();

    store.send(TestAction::Bump).await.unwrap();

    assert_eq!(first.recv().await.unwrap(), TestAction::Bump);
    assert_eq!(second.recv().await.unwrap(), TestAction::Bump);
}

#[tokio::test]
async fn test_lagging_observer_is_told_how_far_behind() {
    let config = StoreConfig::default().with_broadcast_capacity(2);
    let store = Store::with_config(
        TestState::default(),
        TestReducer,
        TestEnvironment,
        config,
    );
    let mut rx = store.subscribe_actions();

    for _ in 0..5 {
        store.send(TestAction::Bump).await.unwrap();
    }

    assert!(matches!(rx.recv().await, Err(RecvError::Lagged(3))));
    assert_eq!(rx.recv().await.unwrap(), TestAction::Bump);
    assert_eq!(store.state(|s| s.counter).await, 5);
}

#[tokio::test]
async fn test_concurrent_senders_are_serialized() {
    let store = new_store();

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                store.send(TestAction::Bump).await.unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("sender task panicked");
    }

    assert_eq!(store.state(|s| s.counter).await, 10);
}

#[tokio::test]
async fn test_close_waits_for_running_effects() {
    let store = new_store();
    let handle = store.send(TestAction::BumpTwice).await.unwrap();

    store.close().await.unwrap();

    // The effect finished, but the action it produced arrived after
    // shutdown began and was dropped.
    assert!(handle.is_complete());
    assert_eq!(store.state(|s| s.counter).await, 1);
    assert_eq!(
        store.send(TestAction::Bump).await.unwrap_err(),
        StoreError::ShutdownInProgress
    );
}

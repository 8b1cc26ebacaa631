use std::time::Duration;

use nfcbridge::controller::{MockController, TagEmulator};
use nfcbridge::session::SessionStatus;

use crate::common::fixtures::{manager_with, wait_for};

/// Slow enough that two back-to-back sessions visibly overlap in the queue.
fn overlapping_mock() -> MockController {
    let mut mock = MockController::with_delays(
        Duration::from_millis(100),
        Duration::from_millis(200),
        Duration::from_millis(250),
    );
    mock.initialize().unwrap();
    mock
}

#[test]
fn second_session_waits_for_the_first() {
    let manager = manager_with(overlapping_mock());

    let a = manager.create_session("order-a", None).unwrap();
    let b = manager.create_session("order-b", None).unwrap();
    let (ida, idb) = (a.id.as_str().to_owned(), b.id.as_str().to_owned());

    // While A is being worked, B must still be pending.
    assert!(wait_for(Duration::from_secs(2), || {
        manager
            .get_session(&ida)
            .is_some_and(|s| s.status == SessionStatus::Ready || s.status == SessionStatus::Tagging)
    }));
    assert_eq!(
        manager.get_session(&idb).unwrap().status,
        SessionStatus::Pending
    );

    // A finishes first, then B.
    assert!(wait_for(Duration::from_secs(3), || {
        manager
            .get_session(&ida)
            .is_some_and(|s| s.status == SessionStatus::Completed)
    }));
    assert!(wait_for(Duration::from_secs(3), || {
        manager
            .get_session(&idb)
            .is_some_and(|s| s.status == SessionStatus::Completed)
    }));

    let a_done = manager.get_session(&ida).unwrap().completed_at.unwrap();
    let b_done = manager.get_session(&idb).unwrap().completed_at.unwrap();
    assert!(a_done <= b_done);

    manager.shutdown();
}

#[test]
fn at_most_one_session_is_ever_active() {
    let manager = manager_with(overlapping_mock());

    for i in 0..4 {
        manager
            .create_session(&format!("order-{}", i), None)
            .unwrap();
    }

    // Sample the whole run; the active count (ready + tagging) must never
    // exceed one.
    let done = wait_for(Duration::from_secs(10), || {
        let stats = manager.stats();
        assert!(
            stats.ready + stats.tagging <= 1,
            "more than one active session: {:?}",
            stats
        );
        stats.completed == 4
    });
    assert!(done, "not all sessions completed");

    manager.shutdown();
}

#[test]
fn queue_respects_creation_order() {
    let manager = manager_with(overlapping_mock());

    let ids: Vec<String> = (0..3)
        .map(|i| {
            manager
                .create_session(&format!("order-{}", i), None)
                .unwrap()
                .id
                .as_str()
                .to_owned()
        })
        .collect();

    assert!(wait_for(Duration::from_secs(10), || {
        manager.stats().completed == 3
    }));

    let completions: Vec<_> = ids
        .iter()
        .map(|id| manager.get_session(id).unwrap().completed_at.unwrap())
        .collect();
    assert!(completions.windows(2).all(|w| w[0] <= w[1]));

    manager.shutdown();
}

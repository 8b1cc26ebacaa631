use std::time::Duration;

use nfcbridge::config::SessionConfig;
use nfcbridge::controller::{MockController, TagEmulator};
use nfcbridge::session::{SessionManager, SessionStatus};

use crate::common::fixtures::{instant_manager, sample_receipt_url, wait_for};

#[test]
fn happy_path_with_realistic_mock_timing() {
    // Full mock timing: ~1 s target init, tap between 3 and 7 s. The whole
    // lifecycle has to land inside 8 s.
    let mut mock = MockController::new();
    mock.initialize().unwrap();
    let manager = SessionManager::start(
        Box::new(mock),
        SessionConfig {
            session_timeout: Duration::from_secs(30),
            tagging_timeout: Duration::from_secs(10),
            ..SessionConfig::default()
        },
    );

    let session = manager
        .create_session("order-42", Some(sample_receipt_url().into()))
        .unwrap();
    assert_eq!(session.status, SessionStatus::Pending);

    let sid = session.id.as_str().to_owned();
    assert!(
        wait_for(Duration::from_secs(8), || {
            manager
                .get_session(&sid)
                .is_some_and(|s| s.status == SessionStatus::Completed)
        }),
        "session did not complete within 8 s"
    );

    let done = manager.get_session(&sid).unwrap();
    assert!(done.completed_at.is_some());
    assert!(done.error.is_none());
    assert_eq!(manager.stats().completed, 1);

    manager.shutdown();
}

#[test]
fn statuses_walk_the_documented_ladder() {
    // Slow the mock down enough to observe intermediate states.
    let mut mock = MockController::with_delays(
        Duration::from_millis(150),
        Duration::from_millis(300),
        Duration::from_millis(400),
    );
    mock.initialize().unwrap();
    let manager = crate::common::fixtures::manager_with(mock);

    let session = manager.create_session("order-1", None).unwrap();
    let sid = session.id.as_str().to_owned();

    let mut seen = vec![SessionStatus::Pending];
    assert!(wait_for(Duration::from_secs(5), || {
        if let Some(s) = manager.get_session(&sid) {
            if seen.last() != Some(&s.status) {
                seen.push(s.status);
            }
            s.status.is_terminal()
        } else {
            false
        }
    }));

    // Sampling may miss a short-lived state but must never observe one out
    // of order.
    let order = [
        SessionStatus::Pending,
        SessionStatus::Ready,
        SessionStatus::Tagging,
        SessionStatus::Completed,
    ];
    let mut last_index = 0;
    for status in &seen {
        let idx = order.iter().position(|o| o == status).unwrap();
        assert!(idx >= last_index, "status went backwards: {:?}", seen);
        last_index = idx;
    }
    assert_eq!(*seen.last().unwrap(), SessionStatus::Completed);

    manager.shutdown();
}

#[test]
fn reaper_removes_terminal_sessions_after_expiry() {
    let mut mock = MockController::instant();
    mock.initialize().unwrap();
    let manager = SessionManager::start(
        Box::new(mock),
        SessionConfig {
            session_timeout: Duration::from_millis(300),
            tagging_timeout: Duration::from_secs(1),
            reap_interval: Duration::from_millis(100),
            default_receipt_url: "https://abc.com".into(),
        },
    );

    let session = manager.create_session("order-1", None).unwrap();
    let sid = session.id.as_str().to_owned();

    // Completes almost immediately, then lingers until expires_at passes.
    assert!(wait_for(Duration::from_secs(1), || {
        manager
            .get_session(&sid)
            .is_some_and(|s| s.status == SessionStatus::Completed)
    }));
    assert!(wait_for(Duration::from_secs(2), || {
        manager.get_session(&sid).is_none()
    }));
    assert_eq!(manager.stats().total, 0);

    manager.shutdown();
}

#[test]
fn url_too_long_fails_before_emulation() {
    let manager = instant_manager();
    let url = format!("https://example.com/{}", "x".repeat(280));
    let session = manager.create_session("order-1", Some(url)).unwrap();
    let sid = session.id.as_str().to_owned();

    assert!(wait_for(Duration::from_secs(2), || {
        manager
            .get_session(&sid)
            .is_some_and(|s| s.status == SessionStatus::Failed)
    }));
    let failed = manager.get_session(&sid).unwrap();
    assert!(failed.error.unwrap().contains("url too long"));

    manager.shutdown();
}

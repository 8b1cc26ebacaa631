use std::time::Duration;

use nfcbridge::controller::{MockController, TagEmulator};
use nfcbridge::session::SessionStatus;

use crate::common::fixtures::{manager_with, wait_for};

#[test]
fn syntax_error_fails_the_session_and_the_next_one_recovers() {
    let mut mock = MockController::instant();
    mock.initialize().unwrap();
    mock.syntax_errors = 1;
    let manager = manager_with(mock);

    let a = manager.create_session("order-a", None).unwrap();
    let ida = a.id.as_str().to_owned();

    assert!(wait_for(Duration::from_secs(2), || {
        manager
            .get_session(&ida)
            .is_some_and(|s| s.status == SessionStatus::Failed)
    }));
    let failed = manager.get_session(&ida).unwrap();
    assert!(failed.error.is_some_and(|e| !e.is_empty()));

    // The worker reinitialized the controller; a fresh session sails through.
    let b = manager.create_session("order-b", None).unwrap();
    let idb = b.id.as_str().to_owned();
    assert!(wait_for(Duration::from_secs(2), || {
        manager
            .get_session(&idb)
            .is_some_and(|s| s.status == SessionStatus::Completed)
    }));

    manager.shutdown();
}

#[test]
fn rejected_target_init_fails_the_session() {
    let mut mock = MockController::instant();
    mock.initialize().unwrap();
    mock.init_rejections = 1;
    let manager = manager_with(mock);

    let a = manager.create_session("order-a", None).unwrap();
    let ida = a.id.as_str().to_owned();
    assert!(wait_for(Duration::from_secs(2), || {
        manager
            .get_session(&ida)
            .is_some_and(|s| s.status == SessionStatus::Failed)
    }));

    let b = manager.create_session("order-b", None).unwrap();
    let idb = b.id.as_str().to_owned();
    assert!(wait_for(Duration::from_secs(2), || {
        manager
            .get_session(&idb)
            .is_some_and(|s| s.status == SessionStatus::Completed)
    }));

    manager.shutdown();
}

#[test]
fn tagging_timeout_expires_the_session_with_message() {
    let mut mock = MockController::instant();
    mock.initialize().unwrap();
    mock.tap_timeouts = 1;
    let manager = nfcbridge::session::SessionManager::start(
        Box::new(mock),
        nfcbridge::config::SessionConfig {
            session_timeout: Duration::from_secs(10),
            tagging_timeout: Duration::from_millis(200),
            reap_interval: Duration::from_secs(5),
            default_receipt_url: "https://abc.com".into(),
        },
    );

    let s = manager.create_session("order-a", None).unwrap();
    let sid = s.id.as_str().to_owned();
    assert!(wait_for(Duration::from_secs(3), || {
        manager
            .get_session(&sid)
            .is_some_and(|s| s.status == SessionStatus::Expired)
    }));
    assert_eq!(
        manager.get_session(&sid).unwrap().error.as_deref(),
        Some("Tagging timeout")
    );

    manager.shutdown();
}

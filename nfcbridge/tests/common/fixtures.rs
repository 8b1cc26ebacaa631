// fixtures.rs — commonly used wire images and manager setups

#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use nfcbridge::config::SessionConfig;
use nfcbridge::controller::{MockController, TagEmulator};
use nfcbridge::session::SessionManager;

pub fn sample_receipt_url() -> &'static str {
    "https://example.com/r/abc"
}

/// Session config with short lifetimes so integration tests stay quick.
pub fn fast_session_config() -> SessionConfig {
    SessionConfig {
        session_timeout: Duration::from_secs(10),
        tagging_timeout: Duration::from_secs(2),
        reap_interval: Duration::from_millis(100),
        default_receipt_url: "https://abc.com".into(),
    }
}

/// Manager over an already-initialized instant mock controller.
pub fn instant_manager() -> Arc<SessionManager> {
    let mut mock = MockController::instant();
    mock.initialize().unwrap();
    SessionManager::start(Box::new(mock), fast_session_config())
}

/// Manager over a pre-built controller, with the fast config.
pub fn manager_with(controller: MockController) -> Arc<SessionManager> {
    SessionManager::start(Box::new(controller), fast_session_config())
}

/// Poll `pred` every 10 ms until it holds or `deadline` elapses.
pub fn wait_for(deadline: Duration, mut pred: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if pred() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

// nfc-bridge-rs/nfcbridge/examples/mock_session.rs
//
// Hardware-free walkthrough of a session lifecycle:
//
//   cargo run --example mock_session

use std::time::Duration;

use nfcbridge::config::SessionConfig;
use nfcbridge::controller::{MockController, TagEmulator};
use nfcbridge::session::SessionManager;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("nfcbridge=debug")
        .init();

    let mut controller = MockController::new();
    controller.initialize().expect("mock initialize cannot fail");

    let manager = SessionManager::start(Box::new(controller), SessionConfig::default());
    let session = manager
        .create_session("demo-order", Some("https://example.com/r/demo".into()))
        .expect("manager is accepting");
    println!("created session {} ({})", session.id, session.status);

    // Watch the status walk pending -> ready -> tagging -> completed; the
    // mock "tap" lands between 3 and 7 seconds in.
    let mut last = session.status;
    loop {
        std::thread::sleep(Duration::from_millis(100));
        let Some(current) = manager.get_session(session.id.as_str()) else {
            break;
        };
        if current.status != last {
            println!("-> {}", current.status);
            last = current.status;
        }
        if current.status.is_terminal() {
            break;
        }
    }

    println!("stats: {:?}", manager.stats());
    manager.shutdown();
}

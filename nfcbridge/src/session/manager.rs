// nfc-bridge-rs/nfcbridge/src/session/manager.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::Utc;

use crate::config::SessionConfig;
use crate::controller::TagEmulator;
use crate::ndef;
use crate::session::{Session, SessionStats, SessionStatus, SessionStore};
use crate::types::SessionId;
use crate::{Error, Result};

/// Idle worker wakeup cadence when nothing notifies.
const WORKER_NAP: Duration = Duration::from_millis(250);

/// Queue of emulation requests in front of the single physical controller.
///
/// One worker thread owns the controller outright and drains the queue, so
/// the hardware sees at most one outstanding command and at most one session
/// is ever ready/tagging. HTTP handlers only touch the store. A reaper
/// thread removes terminal sessions once their expiry passes.
pub struct SessionManager {
    shared: Arc<Shared>,
    worker: Mutex<Option<JoinHandle<()>>>,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

struct Shared {
    store: Mutex<SessionStore>,
    wake: Condvar,
    shutdown: AtomicBool,
    config: SessionConfig,
}

impl Shared {
    fn store(&self) -> MutexGuard<'_, SessionStore> {
        // A poisoned lock means a panic elsewhere; keep serving the data.
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn is_shut_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

impl SessionManager {
    /// Spawn the worker (taking ownership of the controller) and the reaper.
    pub fn start(controller: Box<dyn TagEmulator>, config: SessionConfig) -> Arc<Self> {
        let shared = Arc::new(Shared {
            store: Mutex::new(SessionStore::new()),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            config,
        });

        let worker = {
            let shared = shared.clone();
            std::thread::Builder::new()
                .name("nfc-session-worker".into())
                .spawn(move || run_worker(shared, controller))
                .ok()
        };
        let reaper = {
            let shared = shared.clone();
            std::thread::Builder::new()
                .name("nfc-session-reaper".into())
                .spawn(move || run_reaper(shared))
                .ok()
        };

        Arc::new(Self {
            shared,
            worker: Mutex::new(worker),
            reaper: Mutex::new(reaper),
        })
    }

    /// Create a session and queue it for emulation. The caller's URL wins;
    /// the configured default only fills a missing one.
    pub fn create_session(&self, order_id: &str, receipt_url: Option<String>) -> Result<Session> {
        let mut store = self.shared.store();
        if !store.is_accepting() {
            return Err(Error::ShutDown);
        }

        let url = receipt_url
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.shared.config.default_receipt_url.clone());
        let session = Session::new(
            order_id.to_owned(),
            url,
            self.shared.config.session_timeout,
        );
        store.insert(session.clone());
        drop(store);

        tracing::info!(session = %session.id, order = %session.order_id, "session created");
        self.shared.wake.notify_all();
        Ok(session)
    }

    pub fn get_session(&self, id: &str) -> Option<Session> {
        self.shared.store().find(id).cloned()
    }

    pub fn list_sessions(&self) -> Vec<Session> {
        self.shared.store().list()
    }

    pub fn stats(&self) -> SessionStats {
        self.shared.store().stats()
    }

    /// Stop accepting sessions, drop everything pending, and stop both
    /// threads. An in-flight tag wait runs to its natural timeout; this call
    /// blocks until the worker notices and exits.
    pub fn shutdown(&self) {
        {
            let mut store = self.shared.store();
            store.set_accepting(false);
            store.clear();
        }
        self.shared.shutdown.store(true, Ordering::SeqCst);
        self.shared.wake.notify_all();

        let worker = self.worker.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(h) = worker {
            let _ = h.join();
        }
        let reaper = self.reaper.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(h) = reaper {
            let _ = h.join();
        }
        tracing::info!("session manager shut down");
    }
}

fn run_worker(shared: Arc<Shared>, mut controller: Box<dyn TagEmulator>) {
    while let Some(sid) = next_queued(&shared) {
        // Head-of-queue expiry check, then claim the active slot.
        let url = {
            let mut store = shared.store();
            let session = match store.get(&sid) {
                Some(s) => s,
                None => continue, // reaped or cleared while queued
            };
            if session.is_expired_at(Utc::now()) {
                store.transition(
                    &sid,
                    SessionStatus::Expired,
                    Some("Session expired before processing".into()),
                );
                tracing::info!(session = %sid, "expired before processing");
                continue;
            }
            let url = session.receipt_url.clone();
            store.transition(&sid, SessionStatus::Ready, None);
            url
        };

        let ndef = match ndef::encode_uri(&url) {
            Ok(msg) => msg,
            Err(e) => {
                // Pre-I/O failure; the controller was never touched.
                fail(&shared, &sid, &e.to_string());
                continue;
            }
        };

        match controller.init_as_target(&ndef) {
            Ok(true) => {}
            Ok(false) => {
                fail(&shared, &sid, "target init not acknowledged");
                recover(controller.as_mut());
                continue;
            }
            Err(e) => {
                fail(&shared, &sid, &e.to_string());
                recover(controller.as_mut());
                continue;
            }
        }

        shared
            .store()
            .transition(&sid, SessionStatus::Tagging, None);
        tracing::info!(session = %sid, "tagging");

        match controller.wait_for_tag(shared.config.tagging_timeout) {
            Ok(_) => {
                shared
                    .store()
                    .transition(&sid, SessionStatus::Completed, None);
                tracing::info!(session = %sid, "tag read, session completed");
            }
            Err(Error::ResponseTimeout { .. }) => {
                // No phone showed up; the controller stays in target mode.
                shared.store().transition(
                    &sid,
                    SessionStatus::Expired,
                    Some("Tagging timeout".into()),
                );
                tracing::info!(session = %sid, "tagging timeout");
            }
            Err(e) => {
                fail(&shared, &sid, &e.to_string());
                recover(controller.as_mut());
            }
        }
    }
    tracing::info!("session worker stopped");
}

/// Block until a session id is queued or shutdown is requested.
fn next_queued(shared: &Shared) -> Option<SessionId> {
    let mut store = shared.store();
    loop {
        if shared.is_shut_down() {
            return None;
        }
        if let Some(sid) = store.pop_next() {
            return Some(sid);
        }
        store = match shared.wake.wait_timeout(store, WORKER_NAP) {
            Ok((guard, _)) => guard,
            Err(poisoned) => poisoned.into_inner().0,
        };
    }
}

fn fail(shared: &Shared, sid: &SessionId, message: &str) {
    shared.store().transition(
        sid,
        SessionStatus::Failed,
        Some(message.to_owned()),
    );
    tracing::warn!(session = %sid, error = message, "session failed");
}

fn recover(controller: &mut dyn TagEmulator) {
    if let Err(e) = controller.reinitialize() {
        tracing::error!(error = %e, "controller reinitialization failed");
    }
}

fn run_reaper(shared: Arc<Shared>) {
    loop {
        let store = shared.store();
        let mut store = match shared.wake.wait_timeout(store, shared.config.reap_interval) {
            Ok((guard, _)) => guard,
            Err(poisoned) => poisoned.into_inner().0,
        };
        if shared.is_shut_down() {
            return;
        }
        let removed = store.reap(Utc::now());
        if removed > 0 {
            tracing::debug!(removed, "reaped expired sessions");
        }
    }
}

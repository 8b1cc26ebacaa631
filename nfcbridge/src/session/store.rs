// nfc-bridge-rs/nfcbridge/src/session/store.rs

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};

use crate::session::{Session, SessionStats, SessionStatus};
use crate::types::SessionId;

/// Session map plus the FIFO work queue, guarded together by one lock in
/// the manager so queue order and map contents can never disagree.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, Session>,
    queue: VecDeque<SessionId>,
    accepting: bool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            queue: VecDeque::new(),
            accepting: true,
        }
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    pub fn set_accepting(&mut self, accepting: bool) {
        self.accepting = accepting;
    }

    /// Insert a new session and enqueue it for the worker.
    pub fn insert(&mut self, session: Session) {
        self.queue.push_back(session.id.clone());
        self.sessions.insert(session.id.clone(), session);
    }

    /// Strict FIFO: the oldest queued id comes out first.
    pub fn pop_next(&mut self) -> Option<SessionId> {
        self.queue.pop_front()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Lookup by the raw identifier string (HTTP path parameter).
    pub fn find(&self, id: &str) -> Option<&Session> {
        self.sessions.get(&SessionId::from(id))
    }

    /// Snapshot of all live sessions, oldest first.
    pub fn list(&self) -> Vec<Session> {
        let mut all: Vec<Session> = self.sessions.values().cloned().collect();
        all.sort_by_key(|s| s.created_at);
        all
    }

    pub fn stats(&self) -> SessionStats {
        let mut stats = SessionStats {
            total: self.sessions.len(),
            ..SessionStats::default()
        };
        for s in self.sessions.values() {
            match s.status {
                SessionStatus::Pending => stats.pending += 1,
                SessionStatus::Ready => stats.ready += 1,
                SessionStatus::Tagging => stats.tagging += 1,
                SessionStatus::Completed => stats.completed += 1,
                SessionStatus::Expired => stats.expired += 1,
                SessionStatus::Failed => stats.failed += 1,
            }
        }
        stats
    }

    /// Apply a legal status transition; no-op (false) for unknown ids and
    /// illegal steps, so a session reaped mid-flight is simply skipped.
    pub fn transition(
        &mut self,
        id: &SessionId,
        next: SessionStatus,
        error: Option<String>,
    ) -> bool {
        match self.sessions.get_mut(id) {
            Some(s) => s.advance(next, error),
            None => false,
        }
    }

    /// Remove terminal sessions whose expiry has passed. Non-terminal
    /// sessions are never removed, whatever their age.
    pub fn reap(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, s| !(s.status.is_terminal() && s.expires_at < now));
        before - self.sessions.len()
    }

    /// Drop everything (shutdown).
    pub fn clear(&mut self) {
        self.sessions.clear();
        self.queue.clear();
    }
}

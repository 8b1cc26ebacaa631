// nfc-bridge-rs/nfcbridge/src/session/mod.rs

pub mod manager;
pub mod store;

pub use manager::SessionManager;
pub use store::SessionStore;

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::SessionId;

/// Session lifecycle. Progresses monotonically along
/// `pending -> ready -> tagging -> {completed, expired, failed}`; a session
/// may also expire or fail straight out of pending/ready. Terminal states
/// never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Ready,
    Tagging,
    Completed,
    Expired,
    Failed,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Expired | Self::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Tagging => "tagging",
            Self::Completed => "completed",
            Self::Expired => "expired",
            Self::Failed => "failed",
        }
    }

    /// Whether `next` is a legal forward step from `self`.
    fn allows(&self, next: SessionStatus) -> bool {
        use SessionStatus::*;
        match self {
            Pending => matches!(next, Ready | Expired | Failed),
            Ready => matches!(next, Tagging | Expired | Failed),
            Tagging => matches!(next, Completed | Expired | Failed),
            Completed | Expired | Failed => false,
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emulation attempt: a receipt URL to serve to the next tapped phone.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub order_id: String,
    pub receipt_url: String,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl Session {
    pub fn new(order_id: String, receipt_url: String, lifetime: Duration) -> Self {
        let now = Utc::now();
        let lifetime = chrono::Duration::from_std(lifetime)
            .unwrap_or_else(|_| chrono::Duration::seconds(60));
        Self {
            id: SessionId::generate(),
            order_id,
            receipt_url,
            status: SessionStatus::Pending,
            created_at: now,
            expires_at: now + lifetime,
            completed_at: None,
            error: None,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Apply a status transition if it is legal; terminal states are
    /// immutable. Returns whether the transition happened.
    pub(crate) fn advance(&mut self, next: SessionStatus, error: Option<String>) -> bool {
        if !self.status.allows(next) {
            return false;
        }
        self.status = next;
        if next == SessionStatus::Completed {
            self.completed_at = Some(Utc::now());
        }
        if error.is_some() {
            self.error = error;
        }
        true
    }
}

/// Live counts per status, plus the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total: usize,
    pub pending: usize,
    pub ready: usize,
    pub tagging: usize,
    pub completed: usize,
    pub expired: usize,
    pub failed: usize,
}

// nfc-bridge-rs/nfcbridge/src/http/health.rs

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::http::AppState;
use crate::session::SessionStats;

#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
    timestamp: DateTime<Utc>,
    sessions: SessionStats,
}

/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: Utc::now(),
        sessions: state.sessions.stats(),
    })
}

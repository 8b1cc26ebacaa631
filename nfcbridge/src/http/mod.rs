// nfc-bridge-rs/nfcbridge/src/http/mod.rs

pub mod health;
pub mod sessions;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::session::SessionManager;

/// Shared application state
pub struct AppState {
    pub sessions: Arc<SessionManager>,
}

/// Build the bridge router. Handlers only read and write the session store
/// through the manager; the controller stays private to the worker thread.
pub fn router(sessions: Arc<SessionManager>) -> Router {
    Router::new()
        .route(
            "/api/nfc/sessions",
            get(sessions::list).post(sessions::create),
        )
        .route("/api/nfc/sessions/{session_id}", get(sessions::get))
        .route("/api/health", get(health::health))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { sessions }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// Uniform 500 shape for anything unexpected.
pub(crate) fn internal_error(e: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error",
            "message": e.to_string(),
        })),
    )
}

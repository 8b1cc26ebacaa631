// nfc-bridge-rs/nfcbridge/src/http/sessions.rs

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::http::{internal_error, AppState};
use crate::session::SessionStatus;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub receipt_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    session_id: String,
    status: SessionStatus,
    expires_at: DateTime<Utc>,
    message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetail {
    session_id: String,
    status: SessionStatus,
    expires_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    session_id: String,
    order_id: String,
    status: SessionStatus,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SessionList {
    total: usize,
    sessions: Vec<SessionSummary>,
}

/// POST /api/nfc/sessions - Create an emulation session
pub async fn create(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateSessionRequest>, axum::extract::rejection::JsonRejection>,
) -> Result<(StatusCode, Json<SessionCreated>), (StatusCode, Json<Value>)> {
    // A missing or malformed body is the same bad shape as a missing orderId.
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let order_id = match body.order_id.as_deref().filter(|o| !o.is_empty()) {
        Some(o) => o,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "orderId is required" })),
            ))
        }
    };

    let session = state
        .sessions
        .create_session(order_id, body.receipt_url)
        .map_err(internal_error)?;

    Ok((
        StatusCode::CREATED,
        Json(SessionCreated {
            session_id: session.id.to_string(),
            status: session.status,
            expires_at: session.expires_at,
            message: "NFC session created",
        }),
    ))
}

/// GET /api/nfc/sessions/:session_id - Poll one session
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionDetail>, (StatusCode, Json<Value>)> {
    match state.sessions.get_session(&session_id) {
        Some(s) => Ok(Json(SessionDetail {
            session_id: s.id.to_string(),
            status: s.status,
            expires_at: s.expires_at,
            message: s.error,
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Session not found" })),
        )),
    }
}

/// GET /api/nfc/sessions - List all live sessions
pub async fn list(State(state): State<Arc<AppState>>) -> Json<SessionList> {
    let sessions: Vec<SessionSummary> = state
        .sessions
        .list_sessions()
        .into_iter()
        .map(|s| SessionSummary {
            session_id: s.id.to_string(),
            order_id: s.order_id,
            status: s.status,
            created_at: s.created_at,
            expires_at: s.expires_at,
        })
        .collect();

    Json(SessionList {
        total: sessions.len(),
        sessions,
    })
}

//! Session endpoint handlers.
//!
//! Translates store outcomes into status codes: 200 with the record on
//! success, 404 for a missing (or TTL-evicted) session, 500 when the cache
//! is unreachable.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use session_core::{SessionRecord, SessionUpdate};
use std::time::Duration;
use telemetry::metrics;
use tracing::info;

use crate::response::{ApiError, MessageResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSessionParams {
    pub user_id: i64,
}

/// POST /sessions?user_id=<int> - Create a session.
pub async fn create_handler(
    State(state): State<AppState>,
    Query(params): Query<CreateSessionParams>,
) -> Result<Json<SessionRecord>, ApiError> {
    let record = state.store.create(params.user_id).await?;

    metrics().sessions_created.inc();
    info!(session_id = %record.id, user_id = params.user_id, "Session created");

    Ok(Json(record))
}

/// GET /sessions/{id} - Fetch a session.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionRecord>, ApiError> {
    let record = state.store.get(&id).await?;
    Ok(Json(record))
}

/// PUT /sessions/{id} - Apply a partial update.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<SessionUpdate>,
) -> Result<Json<SessionRecord>, ApiError> {
    let record = state.store.update(&id, update).await?;

    metrics().sessions_updated.inc();
    info!(session_id = %id, visit_count = record.visit_count, "Session updated");

    Ok(Json(record))
}

/// DELETE /sessions/{id} - Remove a session.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let existed = state.store.delete(&id).await?;
    if !existed {
        metrics().session_misses.inc();
        return Err(ApiError::not_found(id));
    }

    metrics().sessions_deleted.inc();
    info!(session_id = %id, "Session deleted");

    Ok(Json(MessageResponse::new("Session deleted successfully")))
}

#[derive(Debug, Deserialize)]
pub struct ExtendParams {
    #[serde(default = "default_extend_minutes")]
    pub minutes: u64,
}

fn default_extend_minutes() -> u64 {
    30
}

/// POST /sessions/{id}/extend?minutes=<int> - Re-arm the session TTL.
pub async fn extend_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ExtendParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    if params.minutes == 0 {
        return Err(ApiError::bad_request("minutes must be at least 1"));
    }

    let ttl = Duration::from_secs(params.minutes * 60);
    let existed = state.store.touch(&id, ttl).await?;
    if !existed {
        metrics().session_misses.inc();
        return Err(ApiError::not_found(id));
    }

    info!(session_id = %id, minutes = params.minutes, "Session extended");

    Ok(Json(MessageResponse::new("Session extended")))
}

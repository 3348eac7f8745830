//! Health check endpoints.

use axum::{extract::State, http::StatusCode, Json};
use telemetry::{health, metrics};

use crate::response::HealthResponse;
use crate::state::AppState;

/// GET /health - Full health check.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    // Fold the cache's view into the registry so probes agree with us
    if state.cache.is_healthy() {
        health().redis.set_healthy();
    } else {
        health().redis.set_unhealthy("cache connection unhealthy");
    }

    Json(HealthResponse {
        status: format!("{:?}", health().status()).to_lowercase(),
        redis_connected: health().redis.is_healthy(),
        sessions_created: metrics().sessions_created.get(),
        session_misses: metrics().session_misses.get(),
        store_errors: metrics().store_errors.get(),
    })
}

/// GET /health/ready - Readiness probe (can accept traffic).
pub async fn ready_handler(State(state): State<AppState>) -> StatusCode {
    if state.cache.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health/live - Liveness probe (service is running).
pub async fn live_handler() -> StatusCode {
    if health().is_alive() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

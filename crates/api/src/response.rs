//! Standardized API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use session_core::CartItem;
use telemetry::metrics;

/// Response for a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response for a cart mutation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartAddResponse {
    pub message: String,
    pub cart: Vec<CartItem>,
}

/// Response for a cart fetch.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartResponse {
    pub cart: Vec<CartItem>,
    pub session_id: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub redis_connected: bool,
    pub sessions_created: u64,
    pub session_misses: u64,
    pub store_errors: u64,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// API error type carrying a status and coded body.
pub struct ApiError {
    pub status: StatusCode,
    pub response: ErrorResponse,
}

impl ApiError {
    pub fn with_code(status: StatusCode, code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            status,
            response: ErrorResponse::new(msg, code),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(StatusCode::NOT_FOUND, "SESS_001", msg)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::with_code(StatusCode::BAD_REQUEST, "VALID_001", msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_code(StatusCode::INTERNAL_SERVER_ERROR, "STORE_001", msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<session_core::Error> for ApiError {
    fn from(err: session_core::Error) -> Self {
        match &err {
            session_core::Error::NotFound(_) => {
                metrics().session_misses.inc();
            }
            session_core::Error::StoreUnavailable(_) => {
                metrics().store_errors.inc();
            }
            _ => {}
        }

        let status = StatusCode::from_u16(err.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        ApiError::with_code(status, err.error_code(), err.to_string())
    }
}

//! Unified error types for the session engine.
//!
//! Error codes:
//! - SESS_001: Session not found (including post-TTL expiry)
//! - VALID_001: Malformed input
//! - STORE_001: Cache unreachable or timed out

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the session engine.
#[derive(Debug, Error)]
pub enum Error {
    /// SESS_001: No record for the given id. A key evicted by the cache's
    /// TTL is indistinguishable from one that never existed.
    #[error("[SESS_001] session not found: {0}")]
    NotFound(String),

    /// VALID_001: Malformed input.
    #[error("[VALID_001] {0}")]
    Validation(String),

    /// STORE_001: Cache unreachable or timed out. Surfaced, never retried
    /// inside this component.
    #[error("[STORE_001] store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a not-found error for a session id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    /// Get the HTTP status code for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::StoreUnavailable(_) => 500,
            Self::Serialization(_) => 500,
        }
    }

    /// Get the error code string.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "SESS_001",
            Self::Validation(_) => "VALID_001",
            Self::StoreUnavailable(_) => "STORE_001",
            Self::Serialization(_) => "STORE_001",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

//! Redis configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Redis cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis connection URL
    pub url: String,
    /// Default session TTL in seconds
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Per-command response timeout in seconds
    #[serde(default = "default_response_timeout_secs")]
    pub response_timeout_secs: u64,
}

fn default_session_ttl_secs() -> u64 {
    3600
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_response_timeout_secs() -> u64 {
    5
}

impl RedisConfig {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            session_ttl_secs: default_session_ttl_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            response_timeout_secs: default_response_timeout_secs(),
        }
    }
}

//! Redis-backed implementation of the session cache.

use async_trait::async_trait;
use redis::{
    aio::{ConnectionManager, ConnectionManagerConfig},
    AsyncCommands, Client, RedisError,
};
use session_core::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::cache::SessionCache;
use crate::config::RedisConfig;

/// Redis client wrapper implementing [`SessionCache`].
///
/// `ConnectionManager` multiplexes one connection and reconnects on failure;
/// cloning it is cheap, so each operation works on its own clone.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    config: RedisConfig,
    healthy: Arc<AtomicBool>,
}

impl RedisCache {
    /// Connects to Redis with the configured timeouts.
    pub async fn connect(config: RedisConfig) -> Result<Self> {
        let manager_config = ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(Duration::from_secs(config.connect_timeout_secs))
            .set_response_timeout(Duration::from_secs(config.response_timeout_secs));

        let client = Client::open(config.url.as_str())
            .map_err(|e| Error::store_unavailable(format!("invalid redis url: {e}")))?;

        let conn = client
            .get_connection_manager_with_config(manager_config)
            .await
            .map_err(|e| Error::store_unavailable(format!("redis connect failed: {e}")))?;

        info!(url = %config.url, "Connected to Redis");

        Ok(Self {
            conn,
            config,
            healthy: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    /// Returns a clone of the managed connection.
    pub fn connection(&self) -> ConnectionManager {
        self.conn.clone()
    }

    fn track<T>(&self, result: std::result::Result<T, RedisError>, op: &str) -> Result<T> {
        match result {
            Ok(value) => {
                self.healthy.store(true, Ordering::Relaxed);
                Ok(value)
            }
            Err(e) => {
                self.healthy.store(false, Ordering::Relaxed);
                warn!(op = op, error = %e, "Redis command failed");
                Err(Error::store_unavailable(format!("{op} failed: {e}")))
            }
        }
    }
}

#[async_trait]
impl SessionCache for RedisCache {
    async fn set(&self, key: &str, ttl: Duration, value: String) -> Result<()> {
        let mut conn = self.conn.clone();
        let result = conn.set_ex(key, value, ttl.as_secs()).await;
        self.track(result, "SETEX")
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let result = conn.get(key).await;
        self.track(result, "GET")
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let result = conn.del(key).await;
        let removed: u64 = self.track(result, "DEL")?;
        Ok(removed > 0)
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>> {
        let mut conn = self.conn.clone();
        let result = conn.ttl(key).await;
        let remaining: i64 = self.track(result, "TTL")?;
        // Redis reports -2 for a missing key and -1 for a key without expiry
        if remaining < 0 {
            Ok(None)
        } else {
            Ok(Some(remaining as u64))
        }
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let mut conn = self.conn.clone();
        let result = conn.expire(key, ttl.as_secs() as i64).await;
        self.track(result, "EXPIRE")
    }

    fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::Relaxed)
    }
}

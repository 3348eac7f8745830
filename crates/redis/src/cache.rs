//! The cache seam the session store is built against.

use async_trait::async_trait;
use session_core::Result;
use std::time::Duration;

/// Key-value cache backing the session store.
///
/// The production implementation is [`crate::RedisCache`]; tests inject an
/// in-memory fake. `Err(StoreUnavailable)` means the cache was unreachable
/// or timed out; an absent key is `Ok(None)` / `Ok(false)`, never an error,
/// so callers can tell the two apart.
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Stores a value under `key` with the given time-to-live.
    async fn set(&self, key: &str, ttl: Duration, value: String) -> Result<()>;

    /// Fetches the value under `key`, `None` if the key is absent
    /// (including after TTL eviction).
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Removes `key`, returning whether it existed.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Remaining TTL in seconds, `None` if the key is absent or has no expiry.
    async fn ttl(&self, key: &str) -> Result<Option<u64>>;

    /// Re-arms the TTL of an existing key without touching its value.
    /// Returns whether the key existed.
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool>;

    /// Whether the cache connection is believed healthy.
    fn is_healthy(&self) -> bool;
}

//! Mock implementations for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use redis_cache::SessionCache;
use session_core::{Error, Result};
use std::collections::HashMap;
use std::time::{Duration, Instant};

struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-memory cache that simulates Redis TTL behavior.
///
/// This implements the same `SessionCache` trait as the real `RedisCache`,
/// so tests exercise every production code path except the network
/// transport. Expiry is lazy: an entry past its deadline is dropped on the
/// next read, which matches the store's view of Redis (an evicted key is
/// simply absent).
pub struct MockCache {
    entries: Mutex<HashMap<String, Entry>>,
    should_fail: Mutex<bool>,
}

impl MockCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            should_fail: Mutex::new(false),
        }
    }

    /// Simulate a cache outage for error-path tests.
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock() = fail;
    }

    /// Force-expire a key, as if its TTL had elapsed.
    pub fn expire_now(&self, key: &str) {
        if let Some(entry) = self.entries.lock().get_mut(key) {
            entry.expires_at = Instant::now() - Duration::from_secs(1);
        }
    }

    /// Number of live (unexpired) keys.
    pub fn key_count(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .values()
            .filter(|e| e.expires_at > now)
            .count()
    }

    fn check(&self) -> Result<()> {
        if *self.should_fail.lock() {
            return Err(Error::store_unavailable("mock cache offline"));
        }
        Ok(())
    }
}

impl Default for MockCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionCache for MockCache {
    async fn set(&self, key: &str, ttl: Duration, value: String) -> Result<()> {
        self.check()?;
        self.entries.lock().insert(
            key.to_string(),
            Entry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.check()?;
        let mut entries = self.entries.lock();
        match entries.remove(key) {
            Some(entry) => Ok(entry.expires_at > Instant::now()),
            None => Ok(false),
        }
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>> {
        self.check()?;
        let now = Instant::now();
        Ok(self
            .entries
            .lock()
            .get(key)
            .filter(|e| e.expires_at > now)
            .map(|e| (e.expires_at - now).as_secs()))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        self.check()?;
        let now = Instant::now();
        let mut entries = self.entries.lock();
        match entries.get_mut(key) {
            Some(entry) if entry.expires_at > now => {
                entry.expires_at = now + ttl;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn is_healthy(&self) -> bool {
        !*self.should_fail.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_cache_round_trip() {
        let mock = MockCache::new();

        mock.set("k", Duration::from_secs(60), "v".into())
            .await
            .unwrap();
        assert_eq!(mock.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(mock.key_count(), 1);

        assert!(mock.delete("k").await.unwrap());
        assert!(!mock.delete("k").await.unwrap());
        assert_eq!(mock.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_mock_cache_expiry_makes_key_absent() {
        let mock = MockCache::new();

        mock.set("k", Duration::from_secs(60), "v".into())
            .await
            .unwrap();
        mock.expire_now("k");

        assert_eq!(mock.get("k").await.unwrap(), None);
        assert_eq!(mock.ttl("k").await.unwrap(), None);
        assert!(!mock.expire("k", Duration::from_secs(60)).await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_cache_failure_mode() {
        let mock = MockCache::new();
        mock.set_should_fail(true);

        let err = mock.get("k").await.unwrap_err();
        assert_eq!(err.error_code(), "STORE_001");
        assert!(!mock.is_healthy());
    }
}

//! CRUD over session records, backed entirely by the injected cache.

use redis_cache::SessionCache;
use session_core::{add_to_cart, session_key, CartItem, Error, Result, SessionRecord, SessionUpdate};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Session store over a [`SessionCache`].
///
/// The store holds no state of its own; every operation is at most one
/// logical read and one logical write against the cache. Updates are plain
/// read-modify-write with no compare-and-swap: two concurrent writers to
/// the same session id race and the later write wins. Because of that,
/// `update` and `add_item` are not idempotent under retry after an
/// ambiguous failure.
pub struct SessionStore {
    cache: Arc<dyn SessionCache>,
    ttl: Duration,
}

impl SessionStore {
    /// Creates a store over an injected cache handle with a default TTL
    /// applied to every write.
    pub fn new(cache: Arc<dyn SessionCache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Default TTL applied to session writes.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Creates a session for a user and persists it under a fresh id.
    pub async fn create(&self, user_id: i64) -> Result<SessionRecord> {
        let record = SessionRecord::new(user_id, self.ttl.as_secs());
        self.persist(&record).await?;
        debug!(session_id = %record.id, user_id, "Session created");
        Ok(record)
    }

    /// Fetches a session, `NotFound` if the cache has no such key.
    pub async fn get(&self, id: &str) -> Result<SessionRecord> {
        self.load(id).await
    }

    /// Applies a partial update and re-persists the record with a fresh TTL.
    ///
    /// Read-modify-write, last write wins; see the type-level docs.
    pub async fn update(&self, id: &str, update: SessionUpdate) -> Result<SessionRecord> {
        let mut record = self.load(id).await?;
        record.apply(update);
        self.persist(&record).await?;
        debug!(session_id = %id, visit_count = record.visit_count, "Session updated");
        Ok(record)
    }

    /// Removes a session, returning whether it existed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let existed = self.cache.delete(&session_key(id)).await?;
        if existed {
            debug!(session_id = %id, "Session deleted");
        }
        Ok(existed)
    }

    /// Merges an item into the session's cart and re-persists the record.
    /// An existing `product_id` gains `quantity`; otherwise a new entry is
    /// appended. Returns the resulting cart.
    pub async fn add_item(
        &self,
        id: &str,
        product_id: i64,
        quantity: u32,
    ) -> Result<Vec<CartItem>> {
        let record = self.load(id).await?;
        let mut cart = record.cart()?;
        add_to_cart(&mut cart, product_id, quantity);

        let mut updated = record;
        updated.set_cart(&cart)?;
        updated.visit_count += 1;
        updated.updated_at = chrono::Utc::now();
        self.persist(&updated).await?;

        debug!(session_id = %id, product_id, quantity, "Cart item added");
        Ok(cart)
    }

    /// Returns the session's cart, empty if the session has none yet.
    pub async fn get_cart(&self, id: &str) -> Result<Vec<CartItem>> {
        let record = self.load(id).await?;
        record.cart()
    }

    /// Re-arms the TTL of an existing session without mutating the record.
    /// Returns whether the session existed.
    pub async fn touch(&self, id: &str, ttl: Duration) -> Result<bool> {
        self.cache.expire(&session_key(id), ttl).await
    }

    async fn load(&self, id: &str) -> Result<SessionRecord> {
        let raw = self
            .cache
            .get(&session_key(id))
            .await?
            .ok_or_else(|| Error::not_found(id))?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn persist(&self, record: &SessionRecord) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        self.cache.set(&session_key(&record.id), self.ttl, raw).await
    }
}

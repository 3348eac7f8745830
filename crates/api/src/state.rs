//! Application state shared across handlers.

use redis_cache::SessionCache;
use std::sync::Arc;
use std::time::Duration;
use store::SessionStore;

/// Shared application state.
///
/// The cache handle is injected at construction, never reached through a
/// process-wide global, so tests can swap in an in-memory fake.
#[derive(Clone)]
pub struct AppState {
    /// Session store (all session state lives in the cache behind it)
    pub store: Arc<SessionStore>,
    /// Cache handle, kept for health reporting
    pub cache: Arc<dyn SessionCache>,
}

impl AppState {
    pub fn new(cache: Arc<dyn SessionCache>, session_ttl: Duration) -> Self {
        Self {
            store: Arc::new(SessionStore::new(cache.clone(), session_ttl)),
            cache,
        }
    }
}

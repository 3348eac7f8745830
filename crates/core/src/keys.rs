//! Cache key namespacing.

/// Prefix for session keys in the cache.
pub const SESSION_KEY_PREFIX: &str = "session:";

/// Builds the namespaced cache key for a session id.
pub fn session_key(id: &str) -> String {
    format!("{SESSION_KEY_PREFIX}{id}")
}

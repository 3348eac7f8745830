//! Session record types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::cart::{CartItem, CART_KEY};
use crate::error::{Error, Result};

/// A per-user session record, stored as JSON in the cache.
///
/// The cache's TTL is the sole authority on record survival: `expires_at`
/// is informational and never inspected by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique session ID, immutable after creation
    pub id: String,
    /// Reference to an external user entity (foreign lookup only)
    pub user_id: i64,
    /// Open-ended per-session data; the `cart` sub-key holds the shopping cart
    pub session_data: Map<String, Value>,
    /// Incremented by one on every successful update
    pub visit_count: u64,
    /// Settable by the client; does not itself cause expiration
    pub is_active: bool,
    /// Informational expiry timestamp
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a new session for a user.
    pub fn new(user_id: i64, ttl_secs: u64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            session_data: Map::new(),
            visit_count: 1,
            is_active: true,
            expires_at: now + Duration::seconds(ttl_secs as i64),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update: merges `session_data` (new keys overwrite,
    /// others are preserved), overwrites `is_active` if provided, increments
    /// `visit_count` and stamps `updated_at`.
    pub fn apply(&mut self, update: SessionUpdate) {
        if let Some(data) = update.session_data {
            for (key, value) in data {
                self.session_data.insert(key, value);
            }
        }
        if let Some(active) = update.is_active {
            self.is_active = active;
        }
        self.visit_count += 1;
        self.updated_at = Utc::now();
    }

    /// Returns the cart embedded in `session_data`, empty if absent.
    pub fn cart(&self) -> Result<Vec<CartItem>> {
        match self.session_data.get(CART_KEY) {
            None => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| Error::validation(format!("corrupt cart value: {e}"))),
        }
    }

    /// Replaces the cart embedded in `session_data`.
    pub fn set_cart(&mut self, cart: &[CartItem]) -> Result<()> {
        self.session_data
            .insert(CART_KEY.to_string(), serde_json::to_value(cart)?);
        Ok(())
    }
}

/// Partial update payload for a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionUpdate {
    /// Keys to merge into `session_data`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_data: Option<Map<String, Value>>,
    /// New active flag, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl SessionUpdate {
    /// Update that only merges session data.
    pub fn data(data: Map<String, Value>) -> Self {
        Self {
            session_data: Some(data),
            is_active: None,
        }
    }

    /// Empty update; still counts a visit.
    pub fn empty() -> Self {
        Self::default()
    }
}

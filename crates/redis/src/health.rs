//! Redis health checks.

use crate::client::RedisCache;
use tracing::{debug, error};

/// Check Redis connection health with a PING round trip.
pub async fn check_connection(cache: &RedisCache) -> bool {
    match ping(cache).await {
        Ok(()) => {
            debug!("Redis connection healthy");
            true
        }
        Err(e) => {
            error!("Redis health check failed: {}", e);
            false
        }
    }
}

async fn ping(cache: &RedisCache) -> Result<(), redis::RedisError> {
    let mut conn = cache.connection();
    let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
    debug!(response = %pong, "Redis PING");
    Ok(())
}

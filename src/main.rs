//! Session Engine
//!
//! Redis-backed session and shopping cart service:
//! - Session CRUD with cache-enforced TTL expiry
//! - Cart sub-resource embedded in the session record
//! - No in-process session state; Redis is the single source of truth

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};

use api::{router, AppState};
use redis_cache::{RedisCache, RedisConfig};
use telemetry::{health, init_tracing_from_env};

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    #[serde(default)]
    redis: RedisConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            redis: RedisConfig::default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    info!("Starting Session Engine v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config()?;

    info!(
        redis_url = %config.redis.url,
        session_ttl_secs = config.redis.session_ttl_secs,
        "Loaded Redis config"
    );

    // Connect to Redis
    let cache = Arc::new(
        RedisCache::connect(config.redis.clone())
            .await
            .context("Failed to connect to Redis")?,
    );

    // Check health and update status
    check_health(&cache).await;

    // Create application state
    let session_ttl = config.redis.session_ttl();
    let state = AppState::new(cache.clone(), session_ttl);

    // Create router
    let app = router(state);

    // Start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("SESSION")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Manual overrides for nested Redis config from environment
    // The config crate's nested parsing doesn't work reliably with underscored field names
    if let Ok(url) = std::env::var("SESSION_REDIS_URL") {
        config.redis.url = url;
    }
    if let Ok(ttl) = std::env::var("SESSION_REDIS_SESSION_TTL_SECS") {
        config.redis.session_ttl_secs = ttl
            .parse()
            .context("SESSION_REDIS_SESSION_TTL_SECS must be an integer")?;
    }

    Ok(config)
}

/// Check Redis health on startup.
async fn check_health(cache: &RedisCache) {
    if redis_cache::health::check_connection(cache).await {
        health().redis.set_healthy();
        info!("Redis connection: healthy");
    } else {
        health().redis.set_unhealthy("Connection failed");
        error!("Redis connection: unhealthy");
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}

//! Redis session cache for the session engine.

pub mod cache;
pub mod client;
pub mod config;
pub mod health;

pub use cache::SessionCache;
pub use client::RedisCache;
pub use config::RedisConfig;

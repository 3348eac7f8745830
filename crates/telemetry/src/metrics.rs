//! Internal metrics collection.
//!
//! In-memory atomic counters reported through the health endpoint.

use std::sync::atomic::{AtomicU64, Ordering};

/// A counter metric.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) -> u64 {
        self.0.swap(0, Ordering::Relaxed)
    }
}

/// Service-wide metrics.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Sessions created
    pub sessions_created: Counter,
    /// Session updates applied (including cart mutations)
    pub sessions_updated: Counter,
    /// Sessions removed via explicit delete
    pub sessions_deleted: Counter,
    /// Cart add operations
    pub cart_adds: Counter,
    /// Lookups that found no record (absent or TTL-evicted)
    pub session_misses: Counter,
    /// Cache failures surfaced to clients
    pub store_errors: Counter,
}

/// Global metrics registry.
pub static METRICS: std::sync::LazyLock<Metrics> = std::sync::LazyLock::new(Metrics::default);

/// Get the global metrics registry.
pub fn metrics() -> &'static Metrics {
    &METRICS
}

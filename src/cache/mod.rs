//! Cache Module
//!
//! In-memory key-value caching with staleness-gated writes and read hooks.

mod entry;
mod key;
mod metrics;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use key::derive_cache_key;
pub use metrics::CacheMetrics;
pub use store::{CacheHook, CacheOptions, KeyValueCache};

use std::sync::Arc;
use tokio::sync::RwLock;

/// The shared response cache handle used across the gateway.
///
/// Response bodies are cached as raw JSON values; one instance serves the
/// whole process and is passed explicitly to every component that needs it.
pub type SharedResponseCache = Arc<RwLock<KeyValueCache<serde_json::Value>>>;

//! Cache Metrics Module
//!
//! Hit/miss counters fed by the cache's observation hooks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::cache::CacheHook;

// == Cache Metrics ==
/// Tracks cache read outcomes.
///
/// Counters are incremented by the hook closures built with [`hit_hook`]
/// and [`miss_hook`], so a cache wired with them reports its read traffic
/// without the store knowing about metrics at all.
///
/// [`hit_hook`]: CacheMetrics::hit_hook
/// [`miss_hook`]: CacheMetrics::miss_hook
#[derive(Debug, Default)]
pub struct CacheMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheMetrics {
    // == Constructor ==
    /// Creates metrics with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Read ==
    /// Number of reads that found an entry.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of reads that found nothing.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    // == Hooks ==
    /// Builds an `on_cache_hit` hook that increments these metrics.
    pub fn hit_hook(metrics: &Arc<CacheMetrics>) -> CacheHook {
        let metrics = Arc::clone(metrics);
        Box::new(move || {
            metrics.record_hit();
            true
        })
    }

    /// Builds an `on_cache_miss` hook that increments these metrics.
    pub fn miss_hook(metrics: &Arc<CacheMetrics>) -> CacheHook {
        let metrics = Arc::clone(metrics);
        Box::new(move || {
            metrics.record_miss();
            true
        })
    }
}

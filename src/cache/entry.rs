//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with staleness checks.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached payload with its creation timestamp.
///
/// Entries are immutable once created. Replacing a key stores a wholly new
/// entry with a new timestamp rather than mutating the payload in place.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached payload, opaque to the cache itself
    pub data: T,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry timestamped at the current wall-clock time.
    pub fn new(data: T) -> Self {
        Self {
            data,
            created_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Returns the age of this entry in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has reached the staleness threshold.
    ///
    /// Boundary condition: an entry whose age equals `stale_time_ms` exactly
    /// is stale. Freshness requires a strictly smaller age.
    pub fn is_stale(&self, stale_time_ms: u64) -> bool {
        self.age_ms() >= stale_time_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

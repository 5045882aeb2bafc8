//! Cache Store Module
//!
//! Generic key-value store with staleness-gated writes and hit/miss hooks.

use std::collections::HashMap;

use crate::cache::CacheEntry;

// == Hook Type ==
/// Observation hook invoked on cache reads.
///
/// The boolean result is advisory only; the store ignores it.
pub type CacheHook = Box<dyn Fn() -> bool + Send + Sync>;

fn noop_hook() -> CacheHook {
    Box::new(|| true)
}

// == Cache Options ==
/// Construction-time options for a [`KeyValueCache`].
pub struct CacheOptions {
    /// Staleness threshold in milliseconds
    pub stale_time_ms: u64,
    /// Invoked by `get_item` when the key is absent
    pub on_cache_miss: CacheHook,
    /// Invoked by `get_item` when the key is present
    pub on_cache_hit: CacheHook,
}

impl CacheOptions {
    /// Creates options with the given stale time and no-op hooks.
    pub fn new(stale_time_ms: u64) -> Self {
        Self {
            stale_time_ms,
            on_cache_miss: noop_hook(),
            on_cache_hit: noop_hook(),
        }
    }
}

impl std::fmt::Debug for CacheOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheOptions")
            .field("stale_time_ms", &self.stale_time_ms)
            .finish_non_exhaustive()
    }
}

// == Key Value Cache ==
/// In-memory mapping from string keys to timestamped entries.
///
/// Writes are gated by the staleness of the entry they would replace: a key
/// that is absent or holds a stale entry accepts the write, a key holding a
/// fresh entry keeps its current value. Reads return stored data regardless
/// of staleness. One instance serves one logical cache domain for the
/// lifetime of the process; state is never persisted.
pub struct KeyValueCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Staleness policy and observation hooks
    options: CacheOptions,
}

impl<T: Clone> KeyValueCache<T> {
    // == Constructor ==
    /// Creates an empty cache with the given options.
    pub fn new(options: CacheOptions) -> Self {
        Self {
            entries: HashMap::new(),
            options,
        }
    }

    // == Write Gate ==
    /// A write is permitted when the key is absent or its entry is stale.
    fn should_update(&self, key: &str) -> bool {
        match self.entries.get(key) {
            None => true,
            Some(entry) => entry.is_stale(self.options.stale_time_ms),
        }
    }

    // == Add Item ==
    /// Offers `data` for storage under `key`.
    ///
    /// The write happens when no entry exists for the key or the existing
    /// entry is stale; a still-fresh entry is left untouched and the offered
    /// data is discarded. A performed write replaces the entry wholesale
    /// with a new timestamp. Infallible; does not invoke the hooks.
    ///
    /// Callers must supply a non-empty key.
    pub fn add_item(&mut self, key: &str, data: T) {
        debug_assert!(!key.is_empty(), "cache keys must be non-empty");

        if self.should_update(key) {
            self.entries.insert(key.to_string(), CacheEntry::new(data));
        }
    }

    // == Get Item ==
    /// Returns the stored data for `key`, or `None` when absent.
    ///
    /// Staleness does not gate reads; a stale entry's data is returned
    /// unchanged. The matching observation hook fires before the value is
    /// handed back.
    pub fn get_item(&self, key: &str) -> Option<T> {
        match self.entries.get(key) {
            Some(entry) => {
                (self.options.on_cache_hit)();
                Some(entry.data.clone())
            }
            None => {
                (self.options.on_cache_miss)();
                None
            }
        }
    }

    // == Get Fresh Item ==
    /// Returns the stored data for `key` only while its entry is fresh.
    ///
    /// The lookup variant for read-through callers: a stale entry counts as
    /// a miss here, so the caller refetches and the write gate accepts the
    /// refreshed value. Fires `on_cache_hit` for a fresh entry and
    /// `on_cache_miss` otherwise.
    pub fn get_fresh_item(&self, key: &str) -> Option<T> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_stale(self.options.stale_time_ms) => {
                (self.options.on_cache_hit)();
                Some(entry.data.clone())
            }
            _ => {
                (self.options.on_cache_miss)();
                None
            }
        }
    }

    // == Clear Cache ==
    /// Removes all entries unconditionally.
    ///
    /// Returns `true` on success. The boolean shape is part of the contract
    /// for callers that branch on it, even though clearing an in-memory map
    /// has no failure path.
    pub fn clear_cache(&mut self) -> bool {
        self.entries.clear();
        true
    }

    // == Clear Cache Item ==
    /// Removes the entry for `key` if present.
    ///
    /// Returns `true` whenever the removal call completes, including when
    /// the key was absent; the result communicates "no failure occurred",
    /// not "an item was removed".
    pub fn clear_cache_item(&mut self, key: &str) -> bool {
        self.entries.remove(key);
        true
    }

    // == Set Stale Time ==
    /// Replaces the staleness threshold used by subsequent checks.
    ///
    /// Takes effect immediately for all entries, since staleness is computed
    /// at check time from each entry's creation timestamp.
    pub fn set_stale_time(&mut self, stale_time_ms: u64) {
        self.options.stale_time_ms = stale_time_ms;
    }

    /// Returns the current staleness threshold in milliseconds.
    pub fn stale_time(&self) -> u64 {
        self.options.stale_time_ms
    }

    // == Prune ==
    /// Removes entries whose age has reached `max_age_ms`.
    ///
    /// Returns the number of entries removed. Used by the background
    /// maintenance sweep with a retention far above the stale time; explicit
    /// clears remain the primary removal mechanism.
    pub fn prune_older_than(&mut self, max_age_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.age_ms() < max_age_ms);
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Test Support ==
    /// Rewrites an entry's timestamp as if it were inserted `age_ms` ago.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, key: &str, age_ms: u64) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.created_at -= age_ms;
        }
    }
}

impl<T> std::fmt::Debug for KeyValueCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyValueCache")
            .field("entries", &self.entries.len())
            .field("stale_time_ms", &self.options.stale_time_ms)
            .finish()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    fn cache_with_stale_time(stale_time_ms: u64) -> KeyValueCache<serde_json::Value> {
        KeyValueCache::new(CacheOptions::new(stale_time_ms))
    }

    #[test]
    fn test_new_cache_is_empty() {
        let cache = cache_with_stale_time(1000);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_add_and_get_roundtrip() {
        let mut cache = cache_with_stale_time(1000);

        cache.add_item("key1", serde_json::json!({"v": 1}));

        assert_eq!(cache.get_item("key1"), Some(serde_json::json!({"v": 1})));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_absent_returns_none() {
        let cache = cache_with_stale_time(1000);
        assert_eq!(cache.get_item("nonexistent"), None);
    }

    #[test]
    fn test_fresh_entry_blocks_overwrite() {
        let mut cache = cache_with_stale_time(60_000);

        cache.add_item("key1", serde_json::json!({"v": 1}));
        cache.add_item("key1", serde_json::json!({"v": 2}));

        assert_eq!(cache.get_item("key1"), Some(serde_json::json!({"v": 1})));
    }

    #[test]
    fn test_stale_entry_permits_overwrite() {
        let mut cache = cache_with_stale_time(1000);

        cache.add_item("key1", serde_json::json!({"v": 1}));
        cache.backdate("key1", 1500);
        cache.add_item("key1", serde_json::json!({"v": 2}));

        assert_eq!(cache.get_item("key1"), Some(serde_json::json!({"v": 2})));
    }

    #[test]
    fn test_write_gate_boundary() {
        let mut cache = cache_with_stale_time(1000);

        // One millisecond short of the threshold: still fresh, write blocked
        cache.add_item("key1", serde_json::json!(1));
        cache.backdate("key1", 999);
        cache.add_item("key1", serde_json::json!(2));
        assert_eq!(cache.get_item("key1"), Some(serde_json::json!(1)));

        // Exactly at the threshold: stale, write goes through
        cache.backdate("key1", 1);
        cache.add_item("key1", serde_json::json!(3));
        assert_eq!(cache.get_item("key1"), Some(serde_json::json!(3)));
    }

    #[test]
    fn test_stale_entry_still_readable() {
        let mut cache = cache_with_stale_time(1000);

        cache.add_item("key1", serde_json::json!("payload"));
        cache.backdate("key1", 10_000);

        // Staleness gates writes only; the read still returns the data
        assert_eq!(cache.get_item("key1"), Some(serde_json::json!("payload")));
    }

    #[test]
    fn test_staleness_scenario() {
        // stale time 1000ms: insert, blocked overwrite while fresh,
        // successful overwrite once stale
        let mut cache = cache_with_stale_time(1000);

        cache.add_item("a", serde_json::json!({"v": 1}));

        cache.backdate("a", 500);
        assert_eq!(cache.get_item("a"), Some(serde_json::json!({"v": 1})));
        cache.add_item("a", serde_json::json!({"v": 2}));
        assert_eq!(cache.get_item("a"), Some(serde_json::json!({"v": 1})));

        cache.backdate("a", 1000);
        cache.add_item("a", serde_json::json!({"v": 3}));
        assert_eq!(cache.get_item("a"), Some(serde_json::json!({"v": 3})));
    }

    #[test]
    fn test_get_fresh_item_rejects_stale_entries() {
        let mut cache = cache_with_stale_time(1000);

        cache.add_item("key1", serde_json::json!("payload"));
        assert_eq!(
            cache.get_fresh_item("key1"),
            Some(serde_json::json!("payload"))
        );

        cache.backdate("key1", 1000);
        assert_eq!(cache.get_fresh_item("key1"), None);
        // The plain read still sees the stale data
        assert_eq!(cache.get_item("key1"), Some(serde_json::json!("payload")));
    }

    #[test]
    fn test_clear_cache() {
        let mut cache = cache_with_stale_time(1000);

        cache.add_item("key1", serde_json::json!(1));
        cache.add_item("key2", serde_json::json!(2));

        assert!(cache.clear_cache());
        assert!(cache.is_empty());
        assert_eq!(cache.get_item("key1"), None);
        assert_eq!(cache.get_item("key2"), None);
    }

    #[test]
    fn test_clear_cache_item() {
        let mut cache = cache_with_stale_time(1000);

        cache.add_item("key1", serde_json::json!(1));
        cache.add_item("key2", serde_json::json!(2));

        assert!(cache.clear_cache_item("key1"));
        assert_eq!(cache.get_item("key1"), None);
        assert_eq!(cache.get_item("key2"), Some(serde_json::json!(2)));
    }

    #[test]
    fn test_clear_cache_item_absent_key() {
        let mut cache = cache_with_stale_time(1000);
        // "No failure occurred", not "an item was removed"
        assert!(cache.clear_cache_item("never_inserted"));
    }

    #[test]
    fn test_set_stale_time_applies_to_existing_entries() {
        let mut cache = cache_with_stale_time(60_000);

        cache.add_item("key1", serde_json::json!(1));
        cache.backdate("key1", 1000);

        // Fresh under the original threshold, write blocked
        cache.add_item("key1", serde_json::json!(2));
        assert_eq!(cache.get_item("key1"), Some(serde_json::json!(1)));

        // Shrinking the threshold makes the same entry stale at once
        cache.set_stale_time(500);
        cache.add_item("key1", serde_json::json!(3));
        assert_eq!(cache.get_item("key1"), Some(serde_json::json!(3)));
    }

    #[test]
    fn test_hooks_fire_on_reads() {
        let hits = Arc::new(AtomicU64::new(0));
        let misses = Arc::new(AtomicU64::new(0));

        let hit_counter = Arc::clone(&hits);
        let miss_counter = Arc::clone(&misses);
        let options = CacheOptions {
            stale_time_ms: 1000,
            on_cache_hit: Box::new(move || {
                hit_counter.fetch_add(1, Ordering::Relaxed);
                true
            }),
            on_cache_miss: Box::new(move || {
                miss_counter.fetch_add(1, Ordering::Relaxed);
                true
            }),
        };

        let mut cache = KeyValueCache::new(options);
        cache.add_item("key1", serde_json::json!(1));

        cache.get_item("key1");
        cache.get_item("key1");
        cache.get_item("absent");

        assert_eq!(hits.load(Ordering::Relaxed), 2);
        assert_eq!(misses.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_writes_do_not_fire_hooks() {
        let misses = Arc::new(AtomicU64::new(0));

        let miss_counter = Arc::clone(&misses);
        let options = CacheOptions {
            stale_time_ms: 1000,
            on_cache_hit: Box::new(|| true),
            on_cache_miss: Box::new(move || {
                miss_counter.fetch_add(1, Ordering::Relaxed);
                true
            }),
        };

        let mut cache = KeyValueCache::new(options);
        cache.add_item("key1", serde_json::json!(1));
        cache.add_item("key1", serde_json::json!(2));

        assert_eq!(misses.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_prune_removes_only_old_entries() {
        let mut cache = cache_with_stale_time(1000);

        cache.add_item("old", serde_json::json!(1));
        cache.add_item("recent", serde_json::json!(2));
        cache.backdate("old", 10_000);

        let removed = cache.prune_older_than(5000);

        assert_eq!(removed, 1);
        assert_eq!(cache.get_item("old"), None);
        assert_eq!(cache.get_item("recent"), Some(serde_json::json!(2)));
    }
}

//! Cache Prune Task
//!
//! Background task that periodically removes long-unused cache entries.
//!
//! Staleness never removes an entry on its own; it only gates overwrites.
//! This sweep bounds memory over long sessions by dropping entries whose age
//! passed the retention threshold, which is configured well above the stale
//! time so ordinary reads are unaffected.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedResponseCache;

/// Spawns a background task that periodically prunes aged cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires a write lock on the cache to remove entries
/// older than `retention_ms`.
///
/// # Arguments
/// * `cache` - Shared response cache to sweep
/// * `prune_interval_secs` - Interval in seconds between sweeps
/// * `retention_ms` - Maximum entry age in milliseconds
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_prune_task(
    cache: SharedResponseCache,
    prune_interval_secs: u64,
    retention_ms: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(prune_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache prune task with interval of {} seconds and retention of {} ms",
            prune_interval_secs, retention_ms
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and prune aged entries
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.prune_older_than(retention_ms)
            };

            // Log sweep statistics
            if removed > 0 {
                info!("Cache prune: removed {} aged entries", removed);
            } else {
                debug!("Cache prune: no aged entries found");
            }
        }
    })
}

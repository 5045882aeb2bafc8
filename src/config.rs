//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream ledger indexing API
    pub upstream_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Staleness threshold for cached search responses, in milliseconds
    pub stale_time_ms: u64,
    /// Background prune task interval in seconds
    pub prune_interval: u64,
    /// Maximum age of a cached entry before the prune task removes it, in milliseconds
    pub retention_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `UPSTREAM_URL` - Upstream API base URL (default: http://127.0.0.1:8080)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SEARCH_STALE_TIME_MS` - Search cache stale time in ms (default: 120000)
    /// - `PRUNE_INTERVAL` - Prune frequency in seconds (default: 60)
    /// - `CACHE_RETENTION_MS` - Entry retention in ms (default: 3600000)
    pub fn from_env() -> Self {
        Self {
            upstream_url: env::var("UPSTREAM_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            stale_time_ms: env::var("SEARCH_STALE_TIME_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120_000),
            prune_interval: env::var("PRUNE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            retention_ms: env::var("CACHE_RETENTION_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3_600_000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_url: "http://127.0.0.1:8080".to_string(),
            server_port: 3000,
            stale_time_ms: 120_000,
            prune_interval: 60,
            retention_ms: 3_600_000,
        }
    }
}

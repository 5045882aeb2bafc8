//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies for
//! gateway-owned endpoints; proxied routes forward upstream payloads.

use serde::Serialize;

/// Response body for the cache stats endpoint (`GET /api/cache/stats`)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Current number of cached entries
    pub entries: usize,
    /// Configured staleness threshold in milliseconds
    pub stale_time_ms: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from counters and cache state.
    pub fn new(hits: u64, misses: u64, entries: usize, stale_time_ms: u64) -> Self {
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            hit_rate,
            entries,
            stale_time_ms,
        }
    }
}

/// Response body for the cache clear endpoints (`DELETE /api/cache[/:key]`)
#[derive(Debug, Clone, Serialize)]
pub struct CacheClearResponse {
    /// Whether the removal call completed without failure
    pub cleared: bool,
    /// The specific key removed, if the request named one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl CacheClearResponse {
    /// Confirmation for a full clear.
    pub fn all(cleared: bool) -> Self {
        Self { cleared, key: None }
    }

    /// Confirmation for a single-key removal.
    pub fn item(key: impl Into<String>, cleared: bool) -> Self {
        Self {
            cleared,
            key: Some(key.into()),
        }
    }
}

/// Response body for the health endpoint (`GET /health`)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

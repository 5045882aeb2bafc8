//! Explorer Gateway - a caching API gateway for a DAG-ledger block explorer
//!
//! Fronts the upstream indexing API for the explorer front-end, adding
//! permissive CORS and an in-memory response cache for search results.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{
    derive_cache_key, CacheEntry, CacheMetrics, CacheOptions, KeyValueCache, SharedResponseCache,
};
pub use client::{CacheableClient, FetchedResponse, LedgerClient};
pub use config::Config;
pub use error::{GatewayError, Result};
pub use tasks::spawn_prune_task;

//! Client Module
//!
//! Outbound HTTP to the upstream ledger indexing API: the cache-intercepting
//! fetch wrapper and the typed endpoint surface built on top of it.

pub mod fetch;
pub mod ledger;
pub mod routes;

pub use fetch::{CacheableClient, FetchedResponse};
pub use ledger::LedgerClient;

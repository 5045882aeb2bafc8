//! Request and Response models for the gateway API
//!
//! This module defines the ledger wire types mirrored from the upstream
//! indexing API plus the DTOs for gateway-owned endpoints.

pub mod ledger;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use ledger::{
    BlockData, BlockchainInfo, ConsensusWave, DagStats, NodeStatus, SearchResult, TransactionData,
    ValidatorSet,
};
pub use requests::{CountQuery, SearchQuery};
pub use responses::{CacheClearResponse, ErrorResponse, HealthResponse, StatsResponse};

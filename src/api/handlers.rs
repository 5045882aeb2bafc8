//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::header::CONTENT_TYPE,
    response::Response,
    Json,
};

use crate::cache::{CacheMetrics, CacheOptions, KeyValueCache, SharedResponseCache};
use crate::client::LedgerClient;
use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::models::{
    BlockData, BlockchainInfo, CacheClearResponse, ConsensusWave, CountQuery, DagStats,
    HealthResponse, NodeStatus, SearchQuery, StatsResponse, TransactionData, ValidatorSet,
};

/// Application state shared across all handlers.
///
/// Holds the single shared response cache, the hit/miss metrics its hooks
/// feed, and the upstream client that records into it.
#[derive(Clone)]
pub struct AppState {
    /// Upstream ledger API client
    pub ledger: Arc<LedgerClient>,
    /// Shared response cache
    pub cache: SharedResponseCache,
    /// Read-outcome counters
    pub metrics: Arc<CacheMetrics>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        ledger: LedgerClient,
        cache: SharedResponseCache,
        metrics: Arc<CacheMetrics>,
    ) -> Self {
        Self {
            ledger: Arc::new(ledger),
            cache,
            metrics,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the cache with its hooks wired to fresh metrics and points the
    /// ledger client at the configured upstream.
    pub fn from_config(config: &Config) -> Result<Self> {
        let metrics = Arc::new(CacheMetrics::new());
        let options = CacheOptions {
            stale_time_ms: config.stale_time_ms,
            on_cache_hit: CacheMetrics::hit_hook(&metrics),
            on_cache_miss: CacheMetrics::miss_hook(&metrics),
        };
        let cache: SharedResponseCache =
            Arc::new(tokio::sync::RwLock::new(KeyValueCache::new(options)));
        let ledger = LedgerClient::new(&config.upstream_url, Arc::clone(&cache))?;

        Ok(Self::new(ledger, cache, metrics))
    }
}

/// Handler for GET /api/blocks
pub async fn blocks_handler(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> Result<Json<Vec<BlockData>>> {
    if let Some(error_msg) = query.validate() {
        return Err(GatewayError::InvalidRequest(error_msg));
    }

    let blocks = state.ledger.blocks(query.effective_count()).await?;
    Ok(Json(blocks))
}

/// Handler for GET /api/blocks/:hash
pub async fn block_handler(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<BlockData>> {
    let block = state.ledger.block_by_hash(&hash).await?;
    Ok(Json(block))
}

/// Handler for GET /api/transactions
pub async fn transactions_handler(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> Result<Json<Vec<TransactionData>>> {
    if let Some(error_msg) = query.validate() {
        return Err(GatewayError::InvalidRequest(error_msg));
    }

    let transactions = state.ledger.transactions(query.effective_count()).await?;
    Ok(Json(transactions))
}

/// Handler for GET /api/transactions/:hash
///
/// 404 when no transaction in the scanned window carries the hash.
pub async fn transaction_handler(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<TransactionData>> {
    match state.ledger.transaction_by_hash(&hash).await? {
        Some(transaction) => Ok(Json(transaction)),
        None => Err(GatewayError::NotFound(hash)),
    }
}

/// Handler for GET /api/status
pub async fn status_handler(State(state): State<AppState>) -> Result<Json<NodeStatus>> {
    Ok(Json(state.ledger.node_status().await?))
}

/// Handler for GET /api/dag/stats
pub async fn dag_stats_handler(State(state): State<AppState>) -> Result<Json<DagStats>> {
    Ok(Json(state.ledger.dag_stats().await?))
}

/// Handler for GET /api/consensus/wave
pub async fn consensus_wave_handler(
    State(state): State<AppState>,
) -> Result<Json<ConsensusWave>> {
    Ok(Json(state.ledger.consensus_wave().await?))
}

/// Handler for GET /api/validators
pub async fn validators_handler(State(state): State<AppState>) -> Result<Json<ValidatorSet>> {
    Ok(Json(state.ledger.validators().await?))
}

/// Handler for GET /api/info
pub async fn info_handler(State(state): State<AppState>) -> Json<BlockchainInfo> {
    Json(state.ledger.blockchain_info().await)
}

/// Handler for GET /api/search
///
/// Forwards the upstream (or cached) status and body unchanged, so clients
/// see exactly what the indexing API answered.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response> {
    if let Some(error_msg) = query.validate() {
        return Err(GatewayError::InvalidRequest(error_msg));
    }

    let fetched = state.ledger.search(&query.q).await?;

    Response::builder()
        .status(fetched.status())
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(fetched.into_body()))
        .map_err(|err| GatewayError::Internal(err.to_string()))
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;

    Json(StatsResponse::new(
        state.metrics.hits(),
        state.metrics.misses(),
        cache.len(),
        cache.stale_time(),
    ))
}

/// Handler for DELETE /api/cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<CacheClearResponse> {
    let cleared = state.cache.write().await.clear_cache();
    Json(CacheClearResponse::all(cleared))
}

/// Handler for DELETE /api/cache/:key
pub async fn clear_cache_item_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<CacheClearResponse> {
    let cleared = state.cache.write().await.clear_cache_item(&key);
    Json(CacheClearResponse::item(key, cleared))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

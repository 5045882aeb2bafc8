//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    block_handler, blocks_handler, cache_stats_handler, clear_cache_handler,
    clear_cache_item_handler, consensus_wave_handler, dag_stats_handler, health_handler,
    info_handler, search_handler, status_handler, transaction_handler, transactions_handler,
    validators_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: allows any origin, mirroring the permissive headers the explorer
///   front-end expects from its API proxy
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/blocks", get(blocks_handler))
        .route("/api/blocks/:hash", get(block_handler))
        .route("/api/transactions", get(transactions_handler))
        .route("/api/transactions/:hash", get(transaction_handler))
        .route("/api/status", get(status_handler))
        .route("/api/dag/stats", get(dag_stats_handler))
        .route("/api/consensus/wave", get(consensus_wave_handler))
        .route("/api/validators", get(validators_handler))
        .route("/api/info", get(info_handler))
        .route("/api/search", get(search_handler))
        .route("/api/cache/stats", get(cache_stats_handler))
        .route("/api/cache", delete(clear_cache_handler))
        .route("/api/cache/:key", delete(clear_cache_item_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

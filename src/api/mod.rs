//! API Module
//!
//! HTTP handlers and routing for the gateway REST surface.
//!
//! # Endpoints
//! - `GET /api/blocks` / `GET /api/blocks/:hash` - Block listing and lookup
//! - `GET /api/transactions` / `GET /api/transactions/:hash` - Transactions
//! - `GET /api/status`, `/api/dag/stats`, `/api/consensus/wave`,
//!   `/api/validators`, `/api/info` - Consensus views
//! - `GET /api/search` - Cached direct search
//! - `GET /api/cache/stats`, `DELETE /api/cache[/:key]` - Cache management
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

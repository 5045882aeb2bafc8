//! Upstream Endpoint Paths
//!
//! Path constants for the ledger indexing API the gateway fronts.

/// Block listing and lookup
pub const BLOCKS: &str = "/blocks";

/// Transaction listing
pub const TRANSACTIONS: &str = "/transactions";

/// Node liveness summary
pub const STATUS: &str = "/status";

/// Aggregate DAG statistics
pub const DAG_STATS: &str = "/dag/stats";

/// Current consensus wave
pub const CONSENSUS_WAVE: &str = "/consensus/wave";

/// Active validator set
pub const VALIDATORS: &str = "/validators";

/// Direct search across tables. Responses on this path family are the ones
/// offered to the response cache.
pub const SEARCH: &str = "/search";

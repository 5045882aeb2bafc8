//! Ledger wire types
//!
//! Payload shapes served by the upstream DAG indexing API. Field names on
//! the wire are camelCase except where noted; models keep Rust naming and
//! carry the serde renames.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// == Block ==
/// A block in the DAG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    pub hash: String,
    pub height: u64,
    pub wave: u64,
    pub round: u64,
    pub validator: String,
    pub timestamp: String,
    pub tx_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<TransactionData>>,
}

// == Transaction ==
/// A transaction, optionally annotated with its containing block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub value: u64,
    pub nonce: u64,
    pub gas_limit: u64,
    pub gas_price: u64,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_wave: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_round: Option<u64>,
}

// == Node Status ==
/// Liveness summary of the queried node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    #[serde(rename = "nodeID")]
    pub node_id: String,
    pub current_wave: u64,
    #[serde(default)]
    pub validators: Vec<String>,
    pub status: String,
}

impl Default for NodeStatus {
    fn default() -> Self {
        Self {
            node_id: "unknown".to_string(),
            current_wave: 0,
            validators: Vec::new(),
            status: "unknown".to_string(),
        }
    }
}

// == DAG Stats ==
/// Aggregate block counts across the DAG.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DagStats {
    pub total_blocks: u64,
    #[serde(default)]
    pub validator_blocks: HashMap<String, u64>,
}

// == Consensus Wave ==
/// Progress of the current consensus wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusWave {
    pub current_wave: u64,
    pub wave_status: String,
}

impl Default for ConsensusWave {
    fn default() -> Self {
        Self {
            current_wave: 0,
            wave_status: "unknown".to_string(),
        }
    }
}

// == Validators ==
/// The active validator set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorSet {
    pub count: u64,
    #[serde(default)]
    pub validators: Vec<String>,
}

// == Search Result ==
/// Outcome of a direct search: which table matched and under what identifier.
///
/// This type uses snake_case on the wire, unlike the rest of the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub identifier: String,
    pub source_table: String,
}

// == Blockchain Info ==
/// Combined view assembled from status, DAG stats, and consensus wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainInfo {
    #[serde(rename = "nodeID")]
    pub node_id: String,
    pub current_wave: u64,
    pub total_blocks: u64,
    pub validator_blocks: HashMap<String, u64>,
    pub wave_status: String,
    pub status: String,
}

impl Default for BlockchainInfo {
    fn default() -> Self {
        Self {
            node_id: "unknown".to_string(),
            current_wave: 0,
            total_blocks: 0,
            validator_blocks: HashMap::new(),
            wave_status: "unknown".to_string(),
            status: "unknown".to_string(),
        }
    }
}

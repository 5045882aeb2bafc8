//! Ledger API Client
//!
//! Typed fetchers for the upstream indexing API. Everything flows through
//! the cacheable fetch wrapper so the search interception point observes
//! every outbound call.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::cache::SharedResponseCache;
use crate::client::fetch::{CacheableClient, FetchedResponse};
use crate::client::routes;
use crate::error::{GatewayError, Result};
use crate::models::{
    BlockData, BlockchainInfo, ConsensusWave, DagStats, NodeStatus, TransactionData, ValidatorSet,
};

// == Ledger Client ==
/// Client for the upstream ledger indexing API.
pub struct LedgerClient {
    fetcher: CacheableClient,
    base: Url,
}

impl LedgerClient {
    // == Constructor ==
    /// Creates a client for the given upstream base URL.
    ///
    /// # Arguments
    /// * `base_url` - Upstream API base URL, e.g. `http://127.0.0.1:8080`
    /// * `cache` - Shared response cache the search family records into
    pub fn new(base_url: &str, cache: SharedResponseCache) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|err| GatewayError::Config(format!("invalid upstream url: {err}")))?;

        Ok(Self {
            fetcher: CacheableClient::new(cache),
            base,
        })
    }

    // == Endpoint ==
    /// Builds the full URL for an upstream path.
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("{}{}", self.base.path().trim_end_matches('/'), path));
        url
    }

    // == Fetch Helper ==
    /// GETs a URL and decodes the 200 body; non-success statuses become errors.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.fetcher.fetch_recording(url.as_str(), &[]).await?;

        if response.status() != StatusCode::OK {
            return Err(GatewayError::UpstreamStatus(response.status()));
        }

        response.json()
    }

    // == Blocks ==
    /// Fetches the most recent blocks.
    pub async fn blocks(&self, count: u32) -> Result<Vec<BlockData>> {
        let mut url = self.endpoint(routes::BLOCKS);
        url.query_pairs_mut()
            .append_pair("count", &count.to_string());
        self.get_json(url).await
    }

    /// Fetches a single block by hash.
    pub async fn block_by_hash(&self, hash: &str) -> Result<BlockData> {
        let url = self.endpoint(&format!("{}/{}", routes::BLOCKS, hash));
        self.get_json(url).await
    }

    // == Transactions ==
    /// Fetches the most recent transactions.
    pub async fn transactions(&self, count: u32) -> Result<Vec<TransactionData>> {
        let mut url = self.endpoint(routes::TRANSACTIONS);
        url.query_pairs_mut()
            .append_pair("count", &count.to_string());
        self.get_json(url).await
    }

    /// Looks up a transaction by hash.
    ///
    /// The upstream has no per-transaction endpoint, so this fetches the
    /// recent list and scans it.
    pub async fn transaction_by_hash(&self, hash: &str) -> Result<Option<TransactionData>> {
        let transactions = self.transactions(100).await?;
        Ok(transactions.into_iter().find(|tx| tx.hash == hash))
    }

    // == Consensus ==
    /// Fetches the node liveness summary.
    pub async fn node_status(&self) -> Result<NodeStatus> {
        self.get_json(self.endpoint(routes::STATUS)).await
    }

    /// Fetches aggregate DAG statistics.
    pub async fn dag_stats(&self) -> Result<DagStats> {
        self.get_json(self.endpoint(routes::DAG_STATS)).await
    }

    /// Fetches the current consensus wave.
    pub async fn consensus_wave(&self) -> Result<ConsensusWave> {
        self.get_json(self.endpoint(routes::CONSENSUS_WAVE)).await
    }

    /// Fetches the active validator set.
    pub async fn validators(&self) -> Result<ValidatorSet> {
        self.get_json(self.endpoint(routes::VALIDATORS)).await
    }

    // == Blockchain Info ==
    /// Assembles the combined chain overview.
    ///
    /// Each constituent fetch that fails is logged and replaced by its
    /// "unknown" default, so the overview itself never fails.
    pub async fn blockchain_info(&self) -> BlockchainInfo {
        let status = match self.node_status().await {
            Ok(status) => status,
            Err(err) => {
                warn!("node status unavailable: {err}");
                NodeStatus::default()
            }
        };

        let stats = match self.dag_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                warn!("dag stats unavailable: {err}");
                DagStats::default()
            }
        };

        let wave = match self.consensus_wave().await {
            Ok(wave) => wave,
            Err(err) => {
                warn!("consensus wave unavailable: {err}");
                ConsensusWave::default()
            }
        };

        BlockchainInfo {
            node_id: status.node_id,
            current_wave: status.current_wave,
            total_blocks: stats.total_blocks,
            validator_blocks: stats.validator_blocks,
            wave_status: wave.wave_status,
            status: status.status,
        }
    }

    // == Search ==
    /// Runs a direct search, served from the cache when a fresh enough
    /// result for the same pattern was already recorded.
    ///
    /// The raw upstream response is handed back so callers see exactly what
    /// the indexing API answered.
    pub async fn search(&self, pattern: &str) -> Result<FetchedResponse> {
        let mut url = self.endpoint(routes::SEARCH);
        url.query_pairs_mut().append_pair("q", pattern);
        self.fetcher.fetch_cached(url.as_str(), &["search", pattern]).await
    }
}

impl std::fmt::Debug for LedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerClient")
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

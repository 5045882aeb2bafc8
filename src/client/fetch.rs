//! Cacheable Fetch
//!
//! HTTP-fetch wrapper that records search responses into the shared
//! key-value cache, plus the cache-consulting variant built on top of it.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::{derive_cache_key, SharedResponseCache};
use crate::client::routes;
use crate::error::Result;

// == Fetched Response ==
/// Status and raw body captured from an upstream response.
///
/// Handed back to callers unchanged whether or not a cache write occurred,
/// so they are unaffected by the interception.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl FetchedResponse {
    /// The upstream HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response, yielding the body bytes.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Synthesizes a 200 response from a cached JSON value.
    pub(crate) fn from_cached(value: &serde_json::Value) -> Result<Self> {
        Ok(Self {
            status: StatusCode::OK,
            body: serde_json::to_vec(value)?,
        })
    }
}

// == Cacheable Client ==
/// HTTP client whose fetches are observed by the response cache.
///
/// Every request goes out as a GET with JSON `Accept`/`Content-Type`
/// headers. Only responses on the search path family are offered to the
/// cache; all other URLs pass through untouched.
#[derive(Debug, Clone)]
pub struct CacheableClient {
    http: Client,
    cache: SharedResponseCache,
}

impl CacheableClient {
    // == Constructor ==
    /// Creates a client writing into the given shared cache.
    pub fn new(cache: SharedResponseCache) -> Self {
        Self::with_client(Client::new(), cache)
    }

    /// Creates a client from an existing `reqwest::Client`.
    pub fn with_client(http: Client, cache: SharedResponseCache) -> Self {
        Self { http, cache }
    }

    /// The shared cache this client records into.
    pub fn cache(&self) -> &SharedResponseCache {
        &self.cache
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    // == Recording Fetch ==
    /// Performs the network call and records eligible responses.
    ///
    /// The network call always happens; the cache is never consulted to
    /// short-circuit it. When the URL contains the search path segment and
    /// the status is 200, the body is decoded as JSON and offered to the
    /// cache under `derive_cache_key(hash_params)`. A body that fails to
    /// decode skips the write and is still returned to the caller.
    ///
    /// Transport errors propagate unchanged and leave the cache untouched.
    /// Dropping the returned future before the body arrives aborts the
    /// request without reaching the cache-write step.
    pub async fn fetch_recording(
        &self,
        url: &str,
        hash_params: &[&str],
    ) -> Result<FetchedResponse> {
        let response = self
            .http
            .get(url)
            .headers(Self::json_headers())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if status == StatusCode::OK && url.contains(routes::SEARCH) {
            match serde_json::from_slice::<serde_json::Value>(&body) {
                Ok(parsed) => {
                    let key = derive_cache_key(hash_params);
                    debug!(%url, %key, "recording search response");
                    self.cache.write().await.add_item(&key, parsed);
                }
                Err(err) => {
                    debug!(%url, "skipping cache write, body is not valid JSON: {err}");
                }
            }
        }

        Ok(FetchedResponse { status, body })
    }

    // == Cached Fetch ==
    /// Consults the cache before fetching.
    ///
    /// For URLs on the search path family, a fresh cached value for the
    /// derived key is returned as a synthesized 200 response without any
    /// network traffic. A stale entry counts as a miss: the request goes
    /// out, and since the write gate admits overwrites of stale entries,
    /// the recorded response refreshes the cache. Any other URL falls
    /// through to [`fetch_recording`] untouched.
    ///
    /// [`fetch_recording`]: CacheableClient::fetch_recording
    pub async fn fetch_cached(&self, url: &str, hash_params: &[&str]) -> Result<FetchedResponse> {
        if url.contains(routes::SEARCH) {
            let key = derive_cache_key(hash_params);
            if let Some(value) = self.cache.read().await.get_fresh_item(&key) {
                debug!(%url, %key, "serving search response from cache");
                return FetchedResponse::from_cached(&value);
            }
        }

        self.fetch_recording(url, hash_params).await
    }
}

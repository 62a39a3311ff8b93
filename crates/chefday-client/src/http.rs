//! JSON fetcher over HTTP.

use async_trait::async_trait;
use tracing::{debug, warn};

use chefday_core::RemoteRecord;

use crate::error::FetchError;

/// Source of untyped JSON documents.
///
/// The pipeline only talks to the network through this trait, so tests can
/// substitute an in-memory implementation.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// GET `url` and decode the body as JSON, failing on a non-2xx status.
    async fn fetch_json(&self, url: &str) -> Result<RemoteRecord, FetchError>;
}

/// [`JsonFetcher`] backed by `reqwest`.
///
/// No timeout is configured; requests run under the client's defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    inner: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<RemoteRecord, FetchError> {
        debug!(url = %url, "GET request");

        let response = self.inner.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Request failed");
            return Err(FetchError::Transport {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

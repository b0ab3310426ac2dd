//! Fetching the list of filterable properties from the remote query index.

use crate::error::IndexError;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Location of the query index relative to the site root.
pub const SAMPLE_INDEX_PATH: &str = "/tools/querypicker/sample-index.json";

/// The index document. Only `columns` is consumed; anything else the
/// index publishes is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryIndex {
    /// Ordered property names available for filtering.
    pub columns: Vec<String>,
}

/// Where the property list comes from. The widget takes this as a trait
/// object so tests can substitute a canned index.
#[async_trait]
pub trait IndexSource: Send + Sync {
    async fn fetch(&self) -> Result<QueryIndex, IndexError>;
}

/// HTTP-backed index source. No retry or timeout policy of its own; a
/// failed fetch propagates and widget initialization does not complete.
pub struct HttpIndexSource {
    client: reqwest::Client,
    url: String,
}

impl HttpIndexSource {
    /// `base_url` is the site origin, `path` the index resource path
    /// (typically [`SAMPLE_INDEX_PATH`]).
    pub fn new(base_url: &str, path: &str) -> Self {
        HttpIndexSource {
            client: reqwest::Client::new(),
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl IndexSource for HttpIndexSource {
    async fn fetch(&self) -> Result<QueryIndex, IndexError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IndexError::Status(status));
        }

        let index: QueryIndex = response.json().await.map_err(IndexError::Decode)?;
        debug!(url = %self.url, columns = index.columns.len(), "query index fetched");
        Ok(index)
    }
}

//! Async KEGG REST client wrapping reqwest.
//!
//! Every call is a single GET with a per-request deadline. Any status other
//! than 200, or a 200 with an empty body, is reported as "nothing found".

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::source::KeggSource;
use crate::types::{KeggError, KeggResult};

/// Public KEGG REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://rest.kegg.jp";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("bio-kegg/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the KEGG REST API.
#[derive(Debug, Clone)]
pub struct KeggClient {
    client: reqwest::Client,
    base_url: Url,
}

impl KeggClient {
    /// Create a client for `base_url` with the given per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> KeggResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| KeggError::Url(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(KeggError::Url(format!("{base_url}: not a base URL")));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Base URL all operations are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> KeggResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| KeggError::Url(format!("{}: not a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> KeggResult<Option<String>> {
        tracing::debug!("GET {url}");
        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::debug!("{url} returned {status}");
            return Ok(None);
        }

        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(body))
    }
}

#[async_trait]
impl KeggSource for KeggClient {
    async fn get_entry(&self, entry_id: &str) -> KeggResult<Option<String>> {
        let url = self.endpoint(&["get", entry_id])?;
        self.fetch(url).await
    }

    async fn find_entries(&self, database: &str, query: &str) -> KeggResult<Option<String>> {
        let url = self.endpoint(&["find", database, query])?;
        self.fetch(url).await
    }

    async fn list_entries(&self, database: &str) -> KeggResult<Option<String>> {
        let url = self.endpoint(&["list", database])?;
        self.fetch(url).await
    }
}

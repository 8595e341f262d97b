//! HTTP-backed content store

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use super::{ContentStore, FetchError};
use crate::config::ReaderConfig;

/// Content store served over HTTP.
///
/// Fetches use GET; existence probes use HEAD so the body is never
/// transferred for a probe.
pub struct HttpContentStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentStore {
    pub fn new(config: &ReaderConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url(path);
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !response.status().is_success() {
            return Err(FetchError::Transport(format!(
                "HTTP {} for {}",
                response.status(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }

    async fn exists(&self, path: &str) -> bool {
        let url = self.url(path);

        match self.client.head(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                // Ambiguity is conservative: an unreachable store reads
                // as "does not exist" and the caller keeps walking.
                warn!("Existence probe for {} failed: {}", url, e);
                false
            }
        }
    }
}

//! Reader configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Base URL of the content store, e.g. `https://example.org/`.
    /// Documents live under `content/{collectionId}/` below it.
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// Maximum existence probes per navigation before giving up
    #[serde(default = "default_max_probe")]
    pub max_probe: u32,
}

fn default_timeout() -> u64 { 30 }
fn default_max_probe() -> u32 { crate::nav::DEFAULT_MAX_PROBE }

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            request_timeout_secs: default_timeout(),
            max_probe: default_max_probe(),
        }
    }
}

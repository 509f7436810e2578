//! Fetching and vetting third-party manifest documents.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vitrine_manifest::Manifest;

use crate::error::ExternalManifestError;

/// Configuration for third-party manifest fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Timeout for one fetch, in seconds.
    pub timeout_secs: u64,
    /// Largest response body accepted, in bytes.
    pub max_manifest_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_manifest_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Fetches manifest documents over HTTP(S) and runs them through schema
/// validation. A document that fails any step never reaches the merger.
#[derive(Debug, Clone)]
pub struct ManifestFetcher {
    config: FetchConfig,
    client: Client,
}

impl ManifestFetcher {
    /// Creates a fetcher with its own HTTP client.
    #[must_use]
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    /// Fetches, parses, and validates the document at `url`.
    pub async fn fetch(&self, url: &str) -> Result<Manifest, ExternalManifestError> {
        debug!(url, "fetching third-party manifest");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        if body.len() > self.config.max_manifest_bytes {
            return Err(ExternalManifestError::TooLarge {
                size: body.len(),
                limit: self.config.max_manifest_bytes,
            });
        }

        let raw: serde_json::Value = serde_json::from_slice(&body)?;
        let manifest = Manifest::validate(&raw)?;
        info!(url, users = manifest.users.len(), "third-party manifest accepted");
        Ok(manifest)
    }
}

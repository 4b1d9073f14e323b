//! Client for the upstream RAE dictionary API.

use std::time::Duration;

use opendict_core::{DictEntry, RaeWordResponse};
use reqwest::{header::ACCEPT, Client, Url};
use thiserror::Error;

/// Characters of an upstream error body written to the log.
const LOGGED_BODY_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("upstream returned status {status}")]
    Status { status: u16, body: String },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Fetches word definitions from the RAE API and reduces them to [`DictEntry`].
pub struct RaeService {
    client: Client,
    base_url: Url,
}

impl RaeService {
    /// Create a service for the API rooted at `base_url` (e.g. `https://rae-api.com/api/words`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| UpstreamError::Config(format!("invalid RAE_API_BASE {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::Config(format!(
                "RAE_API_BASE cannot be a base URL: {}",
                base_url
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// URL of the upstream resource for `word`, with the word percent-encoded
    /// as a single path segment.
    pub fn word_url(&self, word: &str) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Config(format!("cannot extend {}", self.base_url)))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }

    /// Look up `word` upstream and simplify the first meaning.
    pub async fn define(&self, word: &str) -> Result<DictEntry, UpstreamError> {
        let url = self.word_url(word)?;
        tracing::info!("[RAE] GET /api/define q={} -> {}", word, url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::info!("[RAE] upstream status {} for {}", status.as_u16(), word);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let logged: String = body.chars().take(LOGGED_BODY_CHARS).collect();
            tracing::warn!("[RAE] upstream error {} {}", status.as_u16(), logged);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: RaeWordResponse = response.json().await?;
        Ok(payload.into_entry(word))
    }
}

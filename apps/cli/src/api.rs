//! HTTP client for the opendict backend.

use std::time::Duration;

use opendict_core::DictEntry;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

/// Message shown when the backend gives no reason for a failure.
const GENERIC_FAILURE: &str = "Error al consultar";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API URL: {0}")]
    Config(String),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),
}

/// Body of `/api/define`, success or failure.
#[derive(Debug, Deserialize)]
struct DefineBody {
    #[serde(default)]
    data: Option<DictEntry>,
    #[serde(default)]
    message: Option<String>,
}

/// Looks up definitions through the backend's `/api/define` route.
pub struct DefineClient {
    client: Client,
    base_url: Url,
}

impl DefineClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::Config(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(base_url.to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn define_url(&self, q: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "define"]);
        url.query_pairs_mut().append_pair("q", q);
        Ok(url)
    }

    /// Fetch the simplified entry for `q`.
    pub async fn define(&self, q: &str) -> Result<DictEntry, ClientError> {
        let url = self.define_url(q)?;
        let started = std::time::Instant::now();
        tracing::debug!("fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!(
            "response status {} for {} in {}ms",
            status.as_u16(),
            q,
            started.elapsed().as_millis()
        );

        let body: DefineBody = response.json().await?;
        match body.data {
            Some(data) if status.is_success() => Ok(data),
            _ => Err(ClientError::Api(
                body.message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            )),
        }
    }
}

//! Client for the upstream fact API.
//!
//! Performs exactly one outbound GET per call, bounded by an explicit deadline
//! that covers the whole exchange (connect, headers, body). Every failure is
//! returned as an [`UpstreamError`]; choosing fallback content is the caller's job.

use std::time::Duration;

use async_trait::async_trait;
use http::header::ACCEPT;
use serde::Deserialize;
use tokio::time::timeout;

use crate::config::{UpstreamConfig, UPSTREAM_USER_AGENT};
use crate::error::UpstreamError;

/// Decoded upstream payload. Only `fact` is read; any other field is ignored
/// whatever its type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FactPayload {
    pub fact: String,
}

/// Anything that can produce a fact within a deadline.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_fact(&self, deadline: Duration) -> Result<FactPayload, UpstreamError>;
}

/// HTTP implementation of [`FactSource`] backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct CatFactClient {
    http: reqwest::Client,
    url: String,
}

impl CatFactClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .user_agent(UPSTREAM_USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> Result<FactPayload, UpstreamError> {
        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await?;
        let payload: FactPayload =
            serde_json::from_slice(&body).map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        Ok(payload)
    }
}

#[async_trait]
impl FactSource for CatFactClient {
    async fn fetch_fact(&self, deadline: Duration) -> Result<FactPayload, UpstreamError> {
        tracing::debug!(url = %self.url, ?deadline, "Fetching fact from upstream");

        match timeout(deadline, self.request()).await {
            Ok(result) => result,
            // Dropping the request future abandons the in-flight attempt
            Err(_) => Err(UpstreamError::Timeout(deadline)),
        }
    }
}

//! HTTP client for the keyword echo function.

use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Keyword service failures.
#[derive(Debug, Error)]
pub enum SayError {
    #[error("Invalid keyword service URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Keyword service answered {0}")]
    Status(StatusCode),
}

/// A successful answer, relayed to the caller as-is.
#[derive(Debug, Clone)]
pub struct SayReply {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

/// Client for the keyword echo function.
///
/// No request timeout is set; a stalled service stalls the calling request.
#[derive(Debug, Clone)]
pub struct SayClient {
    client: Client,
    url: Url,
}

impl SayClient {
    /// Create a client for the service at `url`.
    pub fn new(url: &str) -> Result<Self, SayError> {
        let url = Url::parse(url).map_err(|e| SayError::InvalidUrl(format!("{}: {}", url, e)))?;
        let client = Client::builder()
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SayError::Client(e.to_string()))?;

        Ok(Self { client, url })
    }

    /// The configured service URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Forward `keyword` as the `keyword` query parameter.
    pub async fn say(&self, keyword: &str) -> Result<SayReply, SayError> {
        debug!("Forwarding keyword to {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .query(&[("keyword", keyword)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SayError::Status(status));
        }

        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await?;

        Ok(SayReply {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

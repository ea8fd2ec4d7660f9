use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::constants::USER_AGENT;
use crate::feed::error::FeedError;

/// Raw HTTP response from the feed endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedResponse {
    pub status: u16,
    pub body: String,
}

impl FeedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of raw feed responses.
///
/// Implementations must bound each call in time and map transport failures to
/// [`FeedError::Timeout`] or [`FeedError::Connection`].
pub trait FeedTransport: Send + Sync + 'static {
    fn get(&self) -> impl Future<Output = Result<FeedResponse, FeedError>> + Send;
}

/// `GET <url>` over reqwest with a per-request timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn classify(&self, error: reqwest::Error) -> FeedError {
        if error.is_timeout() {
            FeedError::Timeout(self.timeout.as_secs())
        } else {
            FeedError::Connection(error.to_string())
        }
    }
}

impl FeedTransport for HttpTransport {
    async fn get(&self) -> Result<FeedResponse, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        Ok(FeedResponse { status, body })
    }
}

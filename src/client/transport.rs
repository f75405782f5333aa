//! HTTP transport seam for the deep-clean client.

use async_trait::async_trait;
use url::Url;

use crate::core::config::Config;
use crate::core::error::Result;

/// Fetches a URL and returns the complete response body.
///
/// The client talks to the network exclusively through this trait, enabling
/// pluggable backends (real HTTP in production, canned or counting stubs in
/// tests).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Production transport backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Builds a transport using the network settings from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self.http.get(url.clone()).send().await?;
        let body = response.error_for_status()?.text().await?;
        tracing::debug!("deep clean response: {}", body);
        Ok(body)
    }
}

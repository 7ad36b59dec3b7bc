//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument, trace};
use url::Url;

use super::Transport;
use crate::Result;
use crate::error::TransportError;

/// HTTP transport over a pooled [`reqwest::Client`].
///
/// The connection pool lives as long as the transport; dropping the last
/// handle closes the pooled connections.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start configuring a transport.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    async fn read_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        trace!(status = %status, "HTTP response");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip_all, fields(path = url.path()))]
    async fn get(&self, url: &Url) -> Result<String> {
        debug!("GET");
        let response = self.client.get(url.clone()).send().await?;
        Self::read_body(response).await
    }

    #[instrument(skip_all, fields(path = url.path()))]
    async fn post_form(&self, url: &Url, fields: &[(String, String)]) -> Result<String> {
        debug!(fields = fields.len(), "POST form");
        let response = self.client.post(url.clone()).form(fields).send().await?;
        Self::read_body(response).await
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self {
            user_agent: concat!("synoapi/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl HttpTransportBuilder {
    /// Override the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Apply a total per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the transport.
    pub fn build(self) -> Result<HttpTransport> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(HttpTransport { client })
    }
}

//! HTTP transport used by the translation client.

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::error::TransportError;

/// Performs the single GET request a translation needs.
///
/// No headers, cookies or authentication are involved. Implementations
/// must treat a non-2xx status as a failure.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetches `url` and returns the response body as text.
    async fn get(&self, url: &Url) -> Result<String, TransportError>;
}

/// [`HttpTransport`] backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client, e.g. one with a proxy or timeout.
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<String, TransportError> {
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body });
        }

        Ok(response.text().await?)
    }
}

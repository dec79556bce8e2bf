//! Sending the form body to the prediction endpoint.

use std::future::Future;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::{ClientConfig, USER_AGENT_VALUE};
use crate::error::{ClientError, Result};

/// One-shot JSON POST.
///
/// Implementations return the response body whatever the HTTP status: the
/// form reads error objects out of 4xx and 5xx bodies the same way it reads
/// results out of 200s.
pub trait PredictionTransport: Send + Sync {
    fn post_json(&self, path: &str, body: String) -> impl Future<Output = Result<String>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Creates a transport for the configured endpoint.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }
}

impl PredictionTransport for HttpTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<String> {
        let url = self.config.url_for(path);
        tracing::debug!("Posting prediction request to {}", url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Prediction endpoint returned an error status");
        }

        Ok(response.text().await?)
    }
}

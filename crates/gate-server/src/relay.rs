//! Forwarding prediction requests to the prediction service.

use axum::body::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use gate_model::PREDICT_PATH;

use crate::error::{Result, ServerError};

/// User agent string for relayed requests.
const USER_AGENT_VALUE: &str = concat!("gate-gateway/", env!("CARGO_PKG_VERSION"));

/// Upstream response, passed back to the browser unchanged.
#[derive(Debug, Clone)]
pub struct Relayed {
    pub status: u16,
    pub body: Bytes,
}

/// HTTP client for the prediction service.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
    base_url: String,
}

impl Upstream {
    /// Creates a client for the given prediction service origin.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ServerError::Upstream(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn predict_url(&self) -> String {
        format!("{}{PREDICT_PATH}", self.base_url)
    }

    /// POST the body once and return whatever the service answered.
    pub async fn forward(&self, body: Bytes) -> Result<Relayed> {
        let url = self.predict_url();
        tracing::debug!("Relaying prediction request to {}", url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(Relayed { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_url() {
        let upstream = Upstream::new("http://scoring.internal:8000/").unwrap();
        assert_eq!(
            upstream.predict_url(),
            "http://scoring.internal:8000/api/predict"
        );
    }
}

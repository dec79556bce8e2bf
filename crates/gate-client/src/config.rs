//! Client configuration.

/// Where the form sends its submissions.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// User agent string for prediction requests.
pub const USER_AGENT_VALUE: &str = concat!("gate-predictor/", env!("CARGO_PKG_VERSION"));

/// Settings for the HTTP transport.
///
/// No timeout or retry: a submission is a single best-effort request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the gateway or prediction service, without a trailing path.
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Join a relative path such as `/api/predict` onto the endpoint.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint.trim_end_matches('/'))
    }
}

//! Gateway configuration.

use crate::error::{Result, ServerError};

/// Listen port when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 5000;

/// Listen address when `--host` is not given.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Settings for one gateway instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin of the prediction service, e.g. `http://scoring.internal:8000`.
    pub upstream: String,
}

impl ServerConfig {
    pub fn new(upstream: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upstream: upstream.into(),
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the settings before anything is bound.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when the upstream is empty or not an
    /// `http`/`https` origin.
    pub fn validate(&self) -> Result<()> {
        let upstream = self.upstream.trim();
        if upstream.is_empty() {
            return Err(ServerError::Config("upstream URL is empty".to_string()));
        }
        if !(upstream.starts_with("http://") || upstream.starts_with("https://")) {
            return Err(ServerError::Config(format!(
                "upstream URL must start with http:// or https://: {upstream}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::new("http://127.0.0.1:8000");
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::new("https://scoring.example")
            .with_host("127.0.0.1")
            .with_port(8080);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_rejects_bad_upstream() {
        assert!(ServerConfig::new("").validate().is_err());
        assert!(ServerConfig::new("scoring.example:8000").validate().is_err());
    }
}

//! Error types for the gateway.

use thiserror::Error;

/// Errors raised while running the gateway or relaying a prediction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServerError {
    /// The configured listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    /// The prediction service could not be reached or its body not read.
    #[error("prediction service unavailable: {0}")]
    Upstream(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ServerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, ServerError>;

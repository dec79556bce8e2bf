//! Error types for the prediction form.

use thiserror::Error;

use gate_model::ModelError;

use crate::form::FormField;

/// Errors that can occur while submitting the prediction form.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// A required field was left empty; nothing was sent.
    #[error("{0} is required")]
    Validation(FormField),

    /// The request could not be sent or the response body not read.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// The response was JSON but neither an error nor a prediction result.
    #[error("unexpected response: {0}")]
    Malformed(String),

    /// The request body could not be encoded.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ClientError {
    /// Returns a short message suitable for showing next to the form.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(_) => "Please fill out all required fields.",
            Self::Network(_) => "Could not reach the prediction service.",
            Self::Parse(_) | Self::Malformed(_) => {
                "The prediction service returned an unreadable response."
            }
            Self::Encode(_) => "An unexpected error occurred.",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<ModelError> for ClientError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Json(e) => Self::Parse(e.to_string()),
            ModelError::Malformed(message) => Self::Malformed(message),
        }
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ClientError::Network("connection refused".to_string());
        assert!(err.user_message().contains("prediction service"));

        let err = ClientError::Validation(FormField::CandidateId);
        assert_eq!(err.to_string(), "Candidate ID is required");
    }

    #[test]
    fn test_validation_hint() {
        let err = ClientError::Validation(FormField::Shift);
        assert_eq!(err.user_message(), "Please fill out all required fields.");
    }

    #[test]
    fn test_model_errors_map_to_parse_or_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            ClientError::from(ModelError::Json(json_err)),
            ClientError::Parse(_)
        ));
        assert!(matches!(
            ClientError::from(ModelError::Malformed("missing field".to_string())),
            ClientError::Malformed(_)
        ));
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response is neither an error nor a prediction result: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

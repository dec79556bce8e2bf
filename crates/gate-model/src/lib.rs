//! Wire model shared by the prediction form, the gateway and the CLI.
//!
//! The prediction service itself is an external collaborator. This crate only
//! fixes the JSON shapes exchanged with it on `POST /api/predict`.

pub mod error;
pub mod request;
pub mod response;
pub mod shift;

pub use error::{ModelError, Result};
pub use request::{PREDICT_PATH, PredictionRequest};
pub use response::{
    FieldValue, MISSING_FIELD_TEXT, PredictionError, PredictionResponse, PredictionResult,
    is_truthy,
};
pub use shift::Shift;

//! Prediction request body.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::shift::Shift;

/// Fixed relative endpoint the form posts to.
pub const PREDICT_PATH: &str = "/api/predict";

/// Body of `POST /api/predict`.
///
/// Property names are fixed by the wire contract. `raw_marks` may be NaN
/// when the marks field held no number; serde_json writes non-finite floats
/// as `null`, which is what the collaborator receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub candidate_id: String,
    #[serde(rename = "rawMarks")]
    pub raw_marks: f64,
    pub shift: Shift,
}

impl PredictionRequest {
    pub fn new(candidate_id: impl Into<String>, raw_marks: f64, shift: Shift) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            raw_marks,
            shift,
        }
    }

    /// Serialize to the JSON body sent on the wire.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

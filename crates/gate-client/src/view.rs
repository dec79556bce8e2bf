//! Result region rendering.
//!
//! The form owns a single result region. It starts hidden and becomes
//! visible with the first completed submission; every later submission
//! replaces its content. Concurrent submissions write to the same region,
//! so whichever response resolves last is what stays on screen.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use gate_model::{FieldValue, MISSING_FIELD_TEXT, PredictionResponse, PredictionResult};

use crate::error::ClientError;

/// Prefix of the generic transport/parse failure message.
pub const FAILURE_PREFIX: &str = "Failed to fetch prediction";

/// What the result region shows after a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Every result field, as the service reported it.
    Success(PredictionResult),
    /// The service's `error` message, verbatim.
    ApplicationError(String),
    /// The request or its response body could not be used.
    Failure(String),
}

impl ResultView {
    /// Build the view for a classified response.
    pub fn from_response(response: PredictionResponse) -> Self {
        match response {
            PredictionResponse::Success(result) => Self::Success(result),
            PredictionResponse::Failure(error) => Self::ApplicationError(error.error),
        }
    }

    /// Build the generic failure view. The message keeps the error's text.
    pub fn from_failure(error: &ClientError) -> Self {
        Self::Failure(format!("{FAILURE_PREFIX}: {error}"))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Labeled `(label, value)` pairs in display order.
    ///
    /// Values are the service's JSON text; omitted fields read `undefined`.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Success(result) => vec![
                ("Candidate ID", field_text(result.candidate_id.as_ref())),
                ("Raw Marks", field_text(result.raw_marks.as_ref())),
                ("Normalized Marks", field_text(result.normalized_marks.as_ref())),
                ("GATE Score", field_text(result.gate_score.as_ref())),
                ("Global Mt", field_text(result.global_mt.as_ref())),
                ("Session Mt", field_text(result.session_mt.as_ref())),
                ("User Count", field_text(result.user_count.as_ref())),
            ],
            Self::ApplicationError(message) => vec![("Error", message.clone())],
            Self::Failure(message) => vec![("Error", message.clone())],
        }
    }
}

fn field_text(field: Option<&FieldValue>) -> String {
    field.map_or_else(|| MISSING_FIELD_TEXT.to_string(), ToString::to_string)
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        for (index, (label, value)) in rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

/// Visibility state of the result region.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RegionState {
    /// Form visible, result hidden.
    #[default]
    Idle,
    /// Result visible with the given content.
    Shown(ResultView),
}

/// Shared handle to the form's result region.
///
/// Clones point at the same region.
#[derive(Debug, Clone, Default)]
pub struct ResultRegion {
    state: Arc<Mutex<RegionState>>,
}

impl ResultRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the region's content and make it visible.
    pub fn show(&self, view: ResultView) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = RegionState::Shown(view);
    }

    pub fn state(&self) -> RegionState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state(), RegionState::Shown(_))
    }

    /// Current content, if the region is visible.
    pub fn view(&self) -> Option<ResultView> {
        match self.state() {
            RegionState::Idle => None,
            RegionState::Shown(view) => Some(view),
        }
    }

    /// Rendered text of the region; empty while hidden.
    pub fn text(&self) -> String {
        self.view().as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

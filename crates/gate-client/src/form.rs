//! Prediction form inputs.
//!
//! Mirrors the browser form: three required inputs, a marks field read
//! with `parseFloat` rules, and a shift selector limited to the two
//! sessions. Presence is the only constraint checked before submission;
//! numeric validity is left to the prediction service.

use std::fmt;

use gate_model::{PredictionRequest, Shift};

use crate::error::{ClientError, Result};

/// The form's input fields, used to name a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CandidateId,
    RawMarks,
    Shift,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::CandidateId => "Candidate ID",
            FormField::RawMarks => "Raw Marks",
            FormField::Shift => "Shift",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Current values of the form inputs, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    pub candidate_id: String,
    pub raw_marks: String,
    pub shift: Option<Shift>,
}

impl PredictionForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_candidate_id(mut self, candidate_id: impl Into<String>) -> Self {
        self.candidate_id = candidate_id.into();
        self
    }

    #[must_use]
    pub fn with_raw_marks(mut self, raw_marks: impl Into<String>) -> Self {
        self.raw_marks = raw_marks.into();
        self
    }

    #[must_use]
    pub fn with_shift(mut self, shift: Shift) -> Self {
        self.shift = Some(shift);
        self
    }

    /// Check the required-field constraints and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] naming the first empty field, in
    /// the order the form lays them out.
    pub fn to_request(&self) -> Result<PredictionRequest> {
        if self.candidate_id.is_empty() {
            return Err(ClientError::Validation(FormField::CandidateId));
        }
        if self.raw_marks.is_empty() {
            return Err(ClientError::Validation(FormField::RawMarks));
        }
        let shift = self
            .shift
            .ok_or(ClientError::Validation(FormField::Shift))?;
        Ok(PredictionRequest::new(
            self.candidate_id.clone(),
            parse_marks(&self.raw_marks),
            shift,
        ))
    }
}

/// Read a number the way `parseFloat` does.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"61.5 marks"` reads as `61.5`. Input with no numeric prefix yields NaN.
pub fn parse_marks(input: &str) -> f64 {
    let text = input.trim_start();
    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }
    let len = numeric_prefix_len(unsigned);
    if len == 0 {
        return f64::NAN;
    }
    unsigned[..len]
        .parse::<f64>()
        .map_or(f64::NAN, |value| sign * value)
}

fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut fraction_end = end + 1;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
            digits += 1;
        }
        if digits > 0 {
            end = fraction_end;
        }
    }
    if digits == 0 {
        return 0;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < bytes.len() && matches!(bytes[exponent_end], b'+' | b'-') {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }
    end
}

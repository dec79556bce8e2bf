//! Shape checks applied before a prediction request is relayed.
//!
//! Rejections use the same messages as the prediction service.

use gate_model::PredictionError;
use serde_json::Value;

pub const MISSING_FIELDS: &str = "Candidate ID, rawMarks, and shift are required";
pub const MARKS_NOT_NUMERIC: &str = "rawMarks must be a number";
pub const NOT_AN_OBJECT: &str = "Request body must be a JSON object";

/// Check a raw request body.
///
/// # Errors
///
/// Returns the error object to send back with a 400 status.
pub fn check_request(body: &[u8]) -> Result<(), PredictionError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| PredictionError::new(NOT_AN_OBJECT))?;
    let Some(object) = value.as_object() else {
        return Err(PredictionError::new(NOT_AN_OBJECT));
    };

    let present = |key: &str| object.get(key).is_some_and(|v| !v.is_null());
    if !(present("candidate_id") && present("rawMarks") && present("shift")) {
        return Err(PredictionError::new(MISSING_FIELDS));
    }

    if !is_numeric(&object["rawMarks"]) {
        return Err(PredictionError::new(MARKS_NOT_NUMERIC));
    }
    Ok(())
}

/// Numbers, booleans and strings that read as a float all count.
fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) | Value::Bool(_) => true,
        Value::String(text) => parses_as_float(text),
        _ => false,
    }
}

/// Float text as the prediction service reads it: surrounding whitespace is
/// ignored and single underscores may group digits (`1_000.5`).
fn parses_as_float(text: &str) -> bool {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut digits = String::with_capacity(text.len());
    for (index, ch) in text.char_indices() {
        if ch == '_' {
            let before = index.checked_sub(1).map(|i| bytes[i]);
            let after = bytes.get(index + 1).copied();
            if !(before.is_some_and(|b| b.is_ascii_digit())
                && after.is_some_and(|b| b.is_ascii_digit()))
            {
                return false;
            }
        } else {
            digits.push(ch);
        }
    }
    digits.parse::<f64>().is_ok()
}

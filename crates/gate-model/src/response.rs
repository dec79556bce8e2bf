//! Prediction service responses and their classification.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;

use crate::error::{ModelError, Result};

/// Label shown for a result field the service left out.
pub const MISSING_FIELD_TEXT: &str = "undefined";

/// A result field exactly as the service wrote it.
///
/// The JSON text is kept untouched, so `1e21` stays `1e21` and `3.0` stays
/// `3.0`. Strings display without their quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Box<RawValue>);

impl FieldValue {
    /// The JSON text as received.
    pub fn raw(&self) -> &str {
        self.0.get()
    }

    /// Text for display: decoded content for strings, raw JSON otherwise.
    pub fn text(&self) -> Cow<'_, str> {
        let raw = self.raw();
        if raw.starts_with('"')
            && let Ok(decoded) = serde_json::from_str::<String>(raw)
        {
            return Cow::Owned(decoded);
        }
        Cow::Borrowed(raw)
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Successful prediction as reported by the prediction service.
///
/// Fields are whatever JSON the service sent, `null` included. A field the
/// service omitted is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    #[serde(
        rename = "candidate_id",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub candidate_id: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub raw_marks: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub normalized_marks: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub gate_score: Option<FieldValue>,
    /// Global mean used by the service's normalization.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub global_mt: Option<FieldValue>,
    /// Mean for the candidate's shift.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub session_mt: Option<FieldValue>,
    /// Candidates contributing to the statistics.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub user_count: Option<FieldValue>,
}

/// Keeps an explicit `null` as a field value instead of folding it into `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    FieldValue::deserialize(deserializer).map(Some)
}

/// Application-level rejection from the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionError {
    pub error: String,
}

impl PredictionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// A response body after classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Success(PredictionResult),
    Failure(PredictionError),
}

impl PredictionResponse {
    /// Parse and classify a raw response body.
    ///
    /// A truthy `error` property wins over any result fields that may also
    /// be present. Falsy values (`""`, `0`, `false`, `null`) are ignored and
    /// the body is read as a result, whatever its fields hold.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Json`] when the body is not JSON and
    /// [`ModelError::Malformed`] when it is JSON but not an object.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        if let Some(error) = value.get("error").filter(|error| is_truthy(error)) {
            let message = match error {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            return Ok(Self::Failure(PredictionError { error: message }));
        }
        if !value.is_object() {
            return Err(ModelError::Malformed(format!(
                "expected a JSON object, got {body}"
            )));
        }
        serde_json::from_str(body)
            .map(Self::Success)
            .map_err(|e| ModelError::Malformed(e.to_string()))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_body() -> Value {
        json!({
            "candidate_id": "GATE24-117",
            "rawMarks": 58.5,
            "normalizedMarks": 60.12,
            "gateScore": 702.4,
            "globalMt": 82.0,
            "sessionMt": 79.33,
            "userCount": 412
        })
    }

    fn success(body: &str) -> PredictionResult {
        match PredictionResponse::from_json(body).unwrap() {
            PredictionResponse::Success(result) => result,
            PredictionResponse::Failure(error) => panic!("unexpected error: {}", error.error),
        }
    }

    fn raw(field: Option<&FieldValue>) -> Option<&str> {
        field.map(FieldValue::raw)
    }

    #[test]
    fn classifies_success() {
        let result = success(&sample_body().to_string());
        assert_eq!(result.candidate_id.as_ref().unwrap().to_string(), "GATE24-117");
        assert_eq!(raw(result.session_mt.as_ref()), Some("79.33"));
        assert_eq!(raw(result.user_count.as_ref()), Some("412"));
    }

    #[test]
    fn keeps_number_text_as_sent() {
        let result = success(
            r#"{"candidate_id":"A","rawMarks":1e-7,"normalizedMarks":1e21,
                "gateScore":350.0,"globalMt":82,"sessionMt":-0.5,"userCount":3.0}"#,
        );
        assert_eq!(raw(result.raw_marks.as_ref()), Some("1e-7"));
        assert_eq!(raw(result.normalized_marks.as_ref()), Some("1e21"));
        assert_eq!(raw(result.gate_score.as_ref()), Some("350.0"));
        assert_eq!(raw(result.user_count.as_ref()), Some("3.0"));
    }

    #[test]
    fn accepts_any_field_types() {
        let result = success(r#"{"candidate_id":42,"normalizedMarks":null,"userCount":"many"}"#);
        assert_eq!(result.candidate_id.as_ref().unwrap().to_string(), "42");
        assert_eq!(raw(result.normalized_marks.as_ref()), Some("null"));
        assert_eq!(result.user_count.as_ref().unwrap().to_string(), "many");
        assert!(result.gate_score.is_none());
    }

    #[test]
    fn classifies_error_message() {
        let response =
            PredictionResponse::from_json(r#"{"error":"rawMarks must be a number"}"#).unwrap();
        assert_eq!(
            response,
            PredictionResponse::Failure(PredictionError::new("rawMarks must be a number"))
        );
    }

    #[test]
    fn truthy_error_wins_over_result_fields() {
        let mut body = sample_body();
        body["error"] = json!("stale statistics");
        let response = PredictionResponse::from_json(&body.to_string()).unwrap();
        assert!(!response.is_success());
    }

    #[test]
    fn falsy_error_is_ignored() {
        for falsy in [json!(""), json!(null), json!(0), json!(false)] {
            let mut body = sample_body();
            body["error"] = falsy;
            let response = PredictionResponse::from_json(&body.to_string()).unwrap();
            assert!(response.is_success());
        }
    }

    #[test]
    fn non_string_error_uses_json_text() {
        let response = PredictionResponse::from_json(r#"{"error":{"code":7}}"#).unwrap();
        assert_eq!(
            response,
            PredictionResponse::Failure(PredictionError::new(r#"{"code":7}"#))
        );
    }

    #[test]
    fn non_object_body_is_malformed() {
        let err = PredictionResponse::from_json("[1,2,3]").unwrap_err();
        assert!(matches!(err, ModelError::Malformed(_)));
    }

    #[test]
    fn non_json_body_is_a_json_error() {
        let err = PredictionResponse::from_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn string_fields_display_unescaped() {
        let result = success(r#"{"candidate_id":"GATE \"24\"","rawMarks":12.50}"#);
        assert_eq!(result.candidate_id.as_ref().unwrap().to_string(), r#"GATE "24""#);
        assert_eq!(raw(result.raw_marks.as_ref()), Some("12.50"));
    }

    #[test]
    fn truthiness_follows_javascript() {
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
    }
}

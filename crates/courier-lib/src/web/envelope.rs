//! Error envelope sent to clients.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field_name: String,
    pub error: String,
}

impl FieldError {
    pub fn new(field_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            error: error.into(),
        }
    }
}

/// Field-level validation failures, serialized as a JSON array.
///
/// Also usable as an error value: it displays as `field validation error`
/// and carries the per-field detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field_name: impl Into<String>, error: impl Into<String>) {
        self.0.push(FieldError::new(field_name, error));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("field validation error")
    }
}

impl std::error::Error for FieldErrors {}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// JSON body for error responses.
///
/// `fields` is left out of the output entirely when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub fields: FieldErrors,
}

impl ErrorEnvelope {
    /// Envelope carrying only a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: FieldErrors::default(),
        }
    }

    /// Envelope for a failed validation, using the errors' own message.
    pub fn validation(fields: FieldErrors) -> Self {
        Self {
            error: fields.to_string(),
            fields,
        }
    }

    pub fn with_fields(mut self, fields: FieldErrors) -> Self {
        self.fields = fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn empty_fields_are_omitted() {
        let value = serde_json::to_value(ErrorEnvelope::new("boom")).unwrap();
        assert_eq!(value, json!({ "error": "boom" }));
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn explicit_empty_fields_are_still_omitted() {
        let envelope = ErrorEnvelope::new("boom").with_fields(FieldErrors::new());
        let text = serde_json::to_string(&envelope).unwrap();
        assert_eq!(text, r#"{"error":"boom"}"#);
    }

    #[test]
    fn populated_fields_render_as_array() {
        let mut fields = FieldErrors::new();
        fields.push("email", "must be a valid address");
        fields.push("age", "must be positive");

        let value = serde_json::to_value(ErrorEnvelope::validation(fields)).unwrap();
        assert_eq!(
            value,
            json!({
                "error": "field validation error",
                "fields": [
                    { "field_name": "email", "error": "must be a valid address" },
                    { "field_name": "age", "error": "must be positive" }
                ]
            })
        );
    }

    #[test]
    fn field_errors_work_as_an_error_value() {
        let fields: FieldErrors = vec![FieldError::new("name", "required")].into_iter().collect();
        let err: Box<dyn std::error::Error> = Box::new(fields.clone());
        assert_eq!(err.to_string(), "field validation error");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.iter().next().map(|f| f.field_name.as_str()), Some("name"));
    }

    #[test]
    fn envelope_without_fields_key_deserializes() {
        let envelope: ErrorEnvelope = serde_json::from_value(json!({ "error": "x" })).unwrap();
        assert!(envelope.fields.is_empty());
        let back: Value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(back, json!({ "error": "x" }));
    }
}

//! Validation of extracted A2UI JSON against the composed schema.

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    #[error("Schema violation at '{path}': {message}")]
    SchemaViolation { path: String, message: String },
}

/// The composed array-of-messages schema could not be compiled. This is a
/// configuration problem, not something a model retry can fix.
#[derive(Error, Debug, Clone)]
#[error("Failed to compile the composed UI schema: {0}")]
pub struct SchemaCompileError(pub String);

/// Validates extracted JSON text against the composed message-array schema.
///
/// Compiled once per turn, before the retry loop; pure afterwards.
pub struct UiValidator {
    validator: jsonschema::Validator,
}

impl UiValidator {
    pub fn new(array_schema: &Value) -> Result<Self, SchemaCompileError> {
        let validator = jsonschema::validator_for(array_schema)
            .map_err(|e| SchemaCompileError(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Parse `json_text` and validate it as an array of A2UI messages.
    ///
    /// The schema-violation diagnostic carries the instance path and the
    /// validator's message so the retry prompt can quote it back to the
    /// model.
    pub fn validate(&self, json_text: &str) -> Result<Value, ValidationError> {
        let instance: Value = serde_json::from_str(json_text)
            .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;

        if let Some(error) = self.validator.iter_errors(&instance).next() {
            return Err(ValidationError::SchemaViolation {
                path: error.instance_path.to_string(),
                message: error.to_string(),
            });
        }

        Ok(instance)
    }
}

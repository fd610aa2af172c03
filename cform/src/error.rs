//! Error types for form construction and validation.

use thiserror::Error;

/// Boxed error returned by a validator that failed unexpectedly.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by the form layer.
///
/// A rule rejecting a value is *not* an error: it is recorded in the form's
/// error state. `FormError` covers everything that stops a call outright.
#[derive(Debug, Error)]
pub enum FormError {
    /// A validator failed unexpectedly instead of returning a verdict.
    #[error("validator for field '{field}' failed: {source}")]
    Rule {
        /// Field whose rule failed.
        field: String,
        /// The error raised by the rule.
        #[source]
        source: BoxError,
    },

    /// A `pattern` rule was given an invalid regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A label width string could not be parsed.
    #[error("invalid label width '{0}' (expected e.g. \"100px\", \"30%\" or \"auto\")")]
    InvalidLabelWidth(String),

    /// Form values must be a JSON object keyed by field name.
    #[error("form value must be a JSON object, got {0}")]
    InvalidValue(&'static str),

    /// Conversion to or from JSON failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl FormError {
    /// Wrap an unexpected validator failure for `field`.
    pub fn rule(field: impl Into<String>, source: BoxError) -> Self {
        Self::Rule {
            field: field.into(),
            source,
        }
    }

    /// Name of the field involved, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Rule { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Describe a JSON value's kind for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

//! Error types used throughout the application

use chroney_common::{CommonError, ErrorClassification, ErrorSeverity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Chroney
///
/// Every variant is a caller-input or configuration problem; there is no
/// transient failure mode, so nothing here is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "snake_case")]
pub enum ChroneyError {
    /// Caller contract violation (zero span, anchor index out of range,
    /// inconsistent cycle length)
    #[error("Validation error for field '{field}': {message}")]
    Validation { field: String, message: String },

    /// A value that could not be interpreted at all (unparseable date)
    #[error("Malformed input for field '{field}' (value: '{value}'): {message}")]
    MalformedInput { field: String, value: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Chroney operations
pub type Result<T> = std::result::Result<T, ChroneyError>;

impl ChroneyError {
    /// Create a validation error for `field`
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create a malformed-input error for `field` carrying the rejected value
    pub fn malformed<F, V, M>(field: F, value: V, message: M) -> Self
    where
        F: Into<String>,
        V: Into<String>,
        M: Into<String>,
    {
        Self::MalformedInput { field: field.into(), value: value.into(), message: message.into() }
    }

    /// Name of the offending input field, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::MalformedInput { field, .. } => Some(field),
            Self::Config(_) => None,
        }
    }

    /// Stable label suitable for logging
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::MalformedInput { .. } => "malformed_input",
            Self::Config(_) => "config",
        }
    }
}

impl From<CommonError> for ChroneyError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::Validation { field, message, value: Some(value) } => {
                Self::MalformedInput { field, value, message }
            }
            CommonError::Validation { field, message, value: None } => {
                Self::Validation { field, message }
            }
            CommonError::Config { message, field: None } => Self::Config(message),
            CommonError::Config { message, field: Some(field) } => {
                Self::Config(format!("{field}: {message}"))
            }
        }
    }
}

impl ErrorClassification for ChroneyError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }
}

//! Boundary validation errors for generated payloads.

use super::error_code::{self, ForgeErrorCode};

/// Rejection of a token set or customization bundle before it reaches the
/// transform engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Unknown {field} `{value}`")]
    UnknownVariant { field: &'static str, value: String },

    #[error("Invalid color `{value}`: {message}")]
    InvalidColor { value: String, message: String },

    #[error("Invalid {field}: {message}")]
    InvalidField { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ForgeErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownVariant { .. } => error_code::UNKNOWN_VARIANT,
            _ => error_code::VALIDATION_ERROR,
        }
    }
}

//! Aggregate error for callers driving the whole theming pipeline.

use super::error_code::ForgeErrorCode;
use super::{ConfigError, GenerationError, ParseError, RegistryError, ValidationError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl ForgeErrorCode for TransformError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
            Self::Generation(e) => e.error_code(),
        }
    }
}

//! Upstream generation errors.

use super::error_code::{self, ForgeErrorCode};
use super::ValidationError;

/// Failure of the injected generation capability. Surfaced to end users as
/// "generation failed", distinct from transform reports.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Generator returned no content")]
    EmptyResponse,

    #[error("Generator failed: {0}")]
    Provider(String),

    #[error("Generated payload rejected: {0}")]
    Rejected(#[from] ValidationError),
}

impl ForgeErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        error_code::GENERATION_FAILED
    }
}

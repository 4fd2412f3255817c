//! Registry assembly errors.

use super::error_code::{self, ForgeErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid registry item name `{0}`")]
    InvalidItemName(String),

    #[error("Failed to serialize registry: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ForgeErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTRY_ERROR
    }
}

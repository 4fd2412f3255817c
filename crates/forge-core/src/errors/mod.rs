//! Error handling for Forge.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod generation_error;
pub mod parse_error;
pub mod registry_error;
pub mod transform_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::ForgeErrorCode;
pub use generation_error::GenerationError;
pub use parse_error::ParseError;
pub use registry_error::RegistryError;
pub use transform_error::TransformError;
pub use validation_error::ValidationError;

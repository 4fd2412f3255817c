//! ForgeErrorCode trait for foreign-boundary conversion.

/// Every error enum implements this to provide a stable code string
/// that callers outside Rust (export jobs, bindings) can match on.
pub trait ForgeErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const GRAMMAR_ERROR: &str = "GRAMMAR_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const UNKNOWN_VARIANT: &str = "UNKNOWN_VARIANT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REGISTRY_ERROR: &str = "REGISTRY_ERROR";
pub const GENERATION_FAILED: &str = "GENERATION_FAILED";

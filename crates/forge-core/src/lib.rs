//! forge-core: shared foundation for the Forge theming engine.
//!
//! - Errors: one `thiserror` enum per subsystem with stable error codes
//! - Config: TOML-based, layered resolution (CLI > env > project > defaults)
//! - Tracing: `FORGE_LOG` driven subscriber setup
//! - Models: design tokens, OKLCH colors, component customization bundles
//! - Traits: the upstream generation capability, injected by the caller

pub mod config;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;
pub mod utils;

pub use config::{ForgeConfig, RegistryConfig, TransformConfig};
pub use errors::{
    ConfigError, ForgeErrorCode, GenerationError, ParseError, RegistryError, TransformError,
    ValidationError,
};
pub use models::{
    Animation, AnimationDefinition, AnimationKind, CodeModification, CustomizationBundle,
    DesignTokens, ModificationAction, OklchColor, Trigger, Variant,
};

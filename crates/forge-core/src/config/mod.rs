//! Configuration system for Forge.
//! TOML-based, 3-layer resolution: CLI > env > project > defaults.

pub mod forge_config;
pub mod registry_config;
pub mod transform_config;

pub use forge_config::{CliOverrides, ForgeConfig};
pub use registry_config::RegistryConfig;
pub use transform_config::TransformConfig;

//! Top-level Forge configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{RegistryConfig, TransformConfig};
use crate::errors::ConfigError;

pub const PROJECT_CONFIG_FILE: &str = "forge.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`FORGE_*`)
/// 3. Project config (`forge.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ForgeConfig {
    pub transform: TransformConfig,
    pub registry: RegistryConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub class_attributes: Option<Vec<String>>,
    pub animation_library: Option<String>,
    pub motion_binding: Option<String>,
    pub synthesize_missing_props: Option<bool>,
    pub respect_directives: Option<bool>,
    pub registry_name: Option<String>,
    pub registry_homepage: Option<String>,
}

impl ForgeConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(root = %root.display(), "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ForgeConfig) -> Result<(), ConfigError> {
        if config
            .transform
            .class_attributes
            .iter()
            .any(|name| !is_attribute_name(name))
        {
            return Err(ConfigError::ValidationFailed {
                field: "transform.class_attributes".to_string(),
                message: "entries must be non-empty JSX attribute names".to_string(),
            });
        }
        if let Some(ref library) = config.transform.animation_library {
            if library.trim().is_empty() || library.contains(['"', '\'', '\n']) {
                return Err(ConfigError::ValidationFailed {
                    field: "transform.animation_library".to_string(),
                    message: "must be a non-empty module specifier without quotes".to_string(),
                });
            }
        }
        if let Some(ref binding) = config.transform.motion_binding {
            if !is_identifier(binding) {
                return Err(ConfigError::ValidationFailed {
                    field: "transform.motion_binding".to_string(),
                    message: "must be a JavaScript identifier".to_string(),
                });
            }
        }
        if let Some(ref name) = config.registry.name {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "registry.name".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ForgeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ForgeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut ForgeConfig, other: &ForgeConfig) {
        // Transform
        if !other.transform.class_attributes.is_empty() {
            base.transform.class_attributes = other.transform.class_attributes.clone();
        }
        if other.transform.animation_library.is_some() {
            base.transform.animation_library = other.transform.animation_library.clone();
        }
        if other.transform.motion_binding.is_some() {
            base.transform.motion_binding = other.transform.motion_binding.clone();
        }
        if other.transform.synthesize_missing_props.is_some() {
            base.transform.synthesize_missing_props = other.transform.synthesize_missing_props;
        }
        if other.transform.respect_directives.is_some() {
            base.transform.respect_directives = other.transform.respect_directives;
        }

        // Registry
        if other.registry.name.is_some() {
            base.registry.name = other.registry.name.clone();
        }
        if other.registry.homepage.is_some() {
            base.registry.homepage = other.registry.homepage.clone();
        }
        if !other.registry.style_dependencies.is_empty() {
            base.registry.style_dependencies = other.registry.style_dependencies.clone();
        }
        if other.registry.component_path_prefix.is_some() {
            base.registry.component_path_prefix = other.registry.component_path_prefix.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `FORGE_TRANSFORM_ANIMATION_LIBRARY`, `FORGE_REGISTRY_NAME`, etc.
    fn apply_env_overrides(config: &mut ForgeConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("FORGE_TRANSFORM_CLASS_ATTRIBUTES") {
            config.transform.class_attributes = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(val) = std::env::var("FORGE_TRANSFORM_ANIMATION_LIBRARY") {
            config.transform.animation_library = Some(val);
        }
        if let Ok(val) = std::env::var("FORGE_TRANSFORM_MOTION_BINDING") {
            config.transform.motion_binding = Some(val);
        }
        if let Ok(val) = std::env::var("FORGE_TRANSFORM_SYNTHESIZE_MISSING_PROPS") {
            config.transform.synthesize_missing_props =
                Some(parse_env_bool("FORGE_TRANSFORM_SYNTHESIZE_MISSING_PROPS", &val)?);
        }
        if let Ok(val) = std::env::var("FORGE_TRANSFORM_RESPECT_DIRECTIVES") {
            config.transform.respect_directives =
                Some(parse_env_bool("FORGE_TRANSFORM_RESPECT_DIRECTIVES", &val)?);
        }
        if let Ok(val) = std::env::var("FORGE_REGISTRY_NAME") {
            config.registry.name = Some(val);
        }
        if let Ok(val) = std::env::var("FORGE_REGISTRY_HOMEPAGE") {
            config.registry.homepage = Some(val);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ForgeConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.class_attributes {
            config.transform.class_attributes = v.clone();
        }
        if let Some(ref v) = cli.animation_library {
            config.transform.animation_library = Some(v.clone());
        }
        if let Some(ref v) = cli.motion_binding {
            config.transform.motion_binding = Some(v.clone());
        }
        if let Some(v) = cli.synthesize_missing_props {
            config.transform.synthesize_missing_props = Some(v);
        }
        if let Some(v) = cli.respect_directives {
            config.transform.respect_directives = Some(v);
        }
        if let Some(ref v) = cli.registry_name {
            config.registry.name = Some(v.clone());
        }
        if let Some(ref v) = cli.registry_homepage {
            config.registry.homepage = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_env_bool(field: &str, val: &str) -> Result<bool, ConfigError> {
    val.trim().parse::<bool>().map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("expected true or false, got `{val}`"),
    })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn is_attribute_name(s: &str) -> bool {
    is_identifier(s.split(['-', ':']).next().unwrap_or_default())
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '-' | ':'))
}

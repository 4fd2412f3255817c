//! Registry export configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STYLE_DEPENDENCIES: &[&str] = &["framer-motion", "clsx", "tailwind-merge"];
pub const DEFAULT_COMPONENT_PATH_PREFIX: &str = "registry/components";

/// Configuration for registry assembly.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Registry name. Default: the theme name.
    pub name: Option<String>,
    /// Registry homepage URL.
    pub homepage: Option<String>,
    /// npm dependencies of the style item.
    #[serde(default)]
    pub style_dependencies: Vec<String>,
    /// Directory prefix for component files. Default: "registry/components".
    pub component_path_prefix: Option<String>,
}

impl RegistryConfig {
    pub fn effective_style_dependencies(&self) -> Vec<String> {
        if self.style_dependencies.is_empty() {
            DEFAULT_STYLE_DEPENDENCIES.iter().map(|s| s.to_string()).collect()
        } else {
            self.style_dependencies.clone()
        }
    }

    pub fn effective_component_path_prefix(&self) -> &str {
        self.component_path_prefix
            .as_deref()
            .unwrap_or(DEFAULT_COMPONENT_PATH_PREFIX)
            .trim_end_matches('/')
    }

    /// Registry name, falling back to `default` when unset.
    pub fn effective_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(default)
    }
}

//! Transform engine configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CLASS_ATTRIBUTES: &[&str] = &["className", "class"];
pub const DEFAULT_ANIMATION_LIBRARY: &str = "framer-motion";
pub const DEFAULT_MOTION_BINDING: &str = "motion";

/// Configuration for the source-tree customization engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TransformConfig {
    /// Attribute names treated as the element's class list.
    /// Default: `["className", "class"]`.
    #[serde(default)]
    pub class_attributes: Vec<String>,
    /// Module specifier of the motion library. Default: "framer-motion".
    pub animation_library: Option<String>,
    /// Named binding imported from the motion library. Default: "motion".
    pub motion_binding: Option<String>,
    /// Whether add-prop creates the attribute when absent. Default: true.
    pub synthesize_missing_props: Option<bool>,
    /// Insert imports after a leading `"use client"`-style prologue. Default: true.
    pub respect_directives: Option<bool>,
}

impl TransformConfig {
    /// Returns the effective className-equivalent attribute names.
    pub fn effective_class_attributes(&self) -> Vec<String> {
        if self.class_attributes.is_empty() {
            DEFAULT_CLASS_ATTRIBUTES.iter().map(|s| s.to_string()).collect()
        } else {
            self.class_attributes.clone()
        }
    }

    /// Returns the effective animation library, defaulting to "framer-motion".
    pub fn effective_animation_library(&self) -> &str {
        self.animation_library
            .as_deref()
            .unwrap_or(DEFAULT_ANIMATION_LIBRARY)
    }

    /// Returns the effective motion binding, defaulting to "motion".
    pub fn effective_motion_binding(&self) -> &str {
        self.motion_binding.as_deref().unwrap_or(DEFAULT_MOTION_BINDING)
    }

    pub fn effective_synthesize_missing_props(&self) -> bool {
        self.synthesize_missing_props.unwrap_or(true)
    }

    pub fn effective_respect_directives(&self) -> bool {
        self.respect_directives.unwrap_or(true)
    }

    /// The import statement injected for motion-config animations.
    pub fn motion_import_statement(&self) -> String {
        format!(
            "import {{ {} }} from \"{}\";",
            self.effective_motion_binding(),
            self.effective_animation_library()
        )
    }
}

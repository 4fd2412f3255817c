//! shadcn-compatible registry documents.

use forge_core::config::RegistryConfig;
use forge_core::errors::RegistryError;
use forge_core::models::DesignTokens;
use forge_core::utils::is_kebab_case;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

pub const REGISTRY_SCHEMA: &str = "https://ui.shadcn.com/schema/registry.json";
pub const REGISTRY_ITEM_SCHEMA: &str = "https://ui.shadcn.com/schema/registry-item.json";

/// Registry item name of the theme style.
pub const STYLE_ITEM_NAME: &str = "style";

/// `registry.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub items: Vec<RegistryItem>,
}

impl Registry {
    pub fn to_json(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn item(&self, name: &str) -> Option<&RegistryItem> {
        self.items.iter().find(|item| item.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registry_dependencies: Vec<String>,
    pub files: Vec<RegistryFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_vars: Option<CssVars>,
}

impl RegistryItem {
    pub fn to_json(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    #[serde(rename = "registry:style")]
    Style,
    #[serde(rename = "registry:ui")]
    Ui,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// CSS variables per scope, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssVars {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub theme: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub light: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub dark: Map<String, Value>,
}

fn insert(map: &mut Map<String, Value>, name: &str, value: impl ToString) {
    map.insert(name.to_string(), Value::String(value.to_string()));
}

pub fn build_registry(name: &str, homepage: Option<&str>, items: Vec<RegistryItem>) -> Registry {
    debug!(name, items = items.len(), "building registry");
    Registry {
        schema: REGISTRY_SCHEMA.to_string(),
        name: name.to_string(),
        homepage: homepage.map(str::to_string),
        items,
    }
}

/// The theme as a `registry:style` item carrying its CSS variables.
pub fn build_style_item(tokens: &DesignTokens, config: &RegistryConfig) -> RegistryItem {
    let mut css_vars = CssVars::default();
    insert(&mut css_vars.theme, "font-sans", &tokens.fonts.body);
    insert(&mut css_vars.theme, "font-heading", &tokens.fonts.heading);
    insert(&mut css_vars.theme, "font-mono", &tokens.fonts.mono);

    insert(&mut css_vars.light, "radius", tokens.radius);
    for (role, color) in tokens.colors.roles() {
        insert(&mut css_vars.light, role, color);
    }
    for (role, color) in tokens.dark_colors.declared() {
        insert(&mut css_vars.dark, role, color);
    }

    RegistryItem {
        schema: Some(REGISTRY_ITEM_SCHEMA.to_string()),
        name: STYLE_ITEM_NAME.to_string(),
        item_type: ItemType::Style,
        dependencies: config.effective_style_dependencies(),
        registry_dependencies: vec!["utils".to_string()],
        files: Vec::new(),
        css_vars: Some(css_vars),
    }
}

/// A `registry:ui` item holding one component file at
/// `<prefix>/<name>/<name>.tsx`.
pub fn build_component_item(
    name: &str,
    code: &str,
    dependencies: Vec<String>,
    registry_dependencies: Vec<String>,
    config: &RegistryConfig,
) -> Result<RegistryItem, RegistryError> {
    if !is_kebab_case(name) {
        return Err(RegistryError::InvalidItemName(name.to_string()));
    }
    let path = format!("{}/{name}/{name}.tsx", config.effective_component_path_prefix());
    debug!(name, path = %path, "building component item");
    Ok(RegistryItem {
        schema: Some(REGISTRY_ITEM_SCHEMA.to_string()),
        name: name.to_string(),
        item_type: ItemType::Ui,
        dependencies,
        registry_dependencies,
        files: vec![RegistryFile {
            path,
            file_type: ItemType::Ui,
            content: Some(code.to_string()),
        }],
        css_vars: None,
    })
}

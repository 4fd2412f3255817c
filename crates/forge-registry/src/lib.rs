//! forge-registry: turns validated design tokens and transformed components
//! into distributable artifacts.
//!
//! - `css`: the theme stylesheet (`:root`, `.dark`, font theme block) and
//!   per-component custom properties
//! - `registry`: shadcn-compatible `registry.json` and registry items

pub mod css;
pub mod registry;

pub use css::{bundle_css, theme_css};
pub use registry::{
    build_component_item, build_registry, build_style_item, CssVars, ItemType, Registry,
    RegistryFile, RegistryItem,
};

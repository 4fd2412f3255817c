//! Data models consumed by the transform and registry crates.

pub mod color;
pub mod customization;
pub mod tokens;

pub use color::OklchColor;
pub use customization::{
    Animation, AnimationDefinition, AnimationKind, CodeModification, CustomizationBundle,
    ModificationAction, Trigger, Variant,
};
pub use tokens::{ColorPalette, DarkColorOverrides, DesignTokens, FontSet, Radius};

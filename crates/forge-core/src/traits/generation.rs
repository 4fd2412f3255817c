//! The upstream generation capability.
//!
//! Forge never owns a model client. Callers pass an implementation of
//! [`DesignGenerator`] and every payload it returns is validated here before
//! anything downstream sees it.

use crate::errors::GenerationError;
use crate::models::{CustomizationBundle, DesignTokens};

/// A source of raw JSON payloads describing a theme or a component customization.
pub trait DesignGenerator: Send + Sync {
    /// Produce a design-token payload for a prose description of an aesthetic.
    fn generate_tokens_json(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Produce a customization payload for one component.
    fn generate_customization_json(
        &self,
        component_name: &str,
        component_source: &str,
        aesthetic: &str,
    ) -> Result<String, GenerationError>;
}

/// Ask the generator for tokens and validate them.
pub fn generate_tokens(
    generator: &dyn DesignGenerator,
    prompt: &str,
) -> Result<DesignTokens, GenerationError> {
    let payload = generator.generate_tokens_json(prompt)?;
    if payload.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    let tokens = DesignTokens::from_json(&payload)?;
    tracing::info!(theme = %tokens.name, "design tokens generated");
    Ok(tokens)
}

/// Ask the generator for a component customization and validate it.
pub fn generate_customization(
    generator: &dyn DesignGenerator,
    component_name: &str,
    component_source: &str,
    aesthetic: &str,
) -> Result<CustomizationBundle, GenerationError> {
    let payload =
        generator.generate_customization_json(component_name, component_source, aesthetic)?;
    if payload.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    let bundle = CustomizationBundle::from_json(&payload)?;
    tracing::debug!(
        component = component_name,
        modifications = bundle.code_modifications.len(),
        animations = bundle.animations.len(),
        "customization generated"
    );
    Ok(bundle)
}

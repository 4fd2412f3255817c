//! Theme stylesheet generation.

use std::fmt::Write;

use forge_core::models::{CustomizationBundle, DesignTokens, OklchColor};
use forge_transform::animations::css_keyframes;

/// The theme as CSS custom properties:
///
/// ```css
/// :root { --radius: 0.5rem; --primary: oklch(...); ... }
/// .dark { --background: ...; ...declared overrides only... }
/// @theme inline { --font-sans: ...; --font-heading: ...; --font-mono: ...; }
/// ```
pub fn theme_css(tokens: &DesignTokens) -> String {
    let mut root = vec![("radius".to_string(), tokens.radius.to_string())];
    root.extend(colors(tokens.colors.roles()));
    let dark: Vec<_> = colors(tokens.dark_colors.declared()).collect();
    let fonts = [
        ("font-sans".to_string(), tokens.fonts.body.clone()),
        ("font-heading".to_string(), tokens.fonts.heading.clone()),
        ("font-mono".to_string(), tokens.fonts.mono.clone()),
    ];

    let mut css = String::new();
    write_block(&mut css, ":root", &root);
    css.push('\n');
    write_block(&mut css, ".dark", &dark);
    css.push('\n');
    write_block(&mut css, "@theme inline", &fonts);
    css
}

/// A component's own stylesheet: its custom properties on `:root` followed
/// by its keyframe animations. Empty when the bundle declares neither.
pub fn bundle_css(bundle: &CustomizationBundle) -> String {
    let vars: Vec<(String, String)> = bundle
        .css_vars
        .iter()
        .map(|(name, value)| (name.trim_start_matches("--").to_string(), value.clone()))
        .collect();
    let keyframes = css_keyframes(&bundle.animations);

    let mut css = String::new();
    if !vars.is_empty() {
        write_block(&mut css, ":root", &vars);
    }
    if !keyframes.is_empty() {
        if !css.is_empty() {
            css.push('\n');
        }
        css.push_str(&keyframes);
        css.push('\n');
    }
    css
}

fn colors(
    roles: Vec<(&'static str, OklchColor)>,
) -> impl Iterator<Item = (String, String)> {
    roles
        .into_iter()
        .map(|(name, color)| (name.to_string(), color.to_string()))
}

fn write_block(css: &mut String, selector: &str, vars: &[(String, String)]) {
    let _ = writeln!(css, "{selector} {{");
    for (name, value) in vars {
        let _ = writeln!(css, "  --{name}: {value};");
    }
    css.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::models::{Animation, AnimationDefinition, AnimationKind, Trigger};

    #[test]
    fn bundle_css_combines_vars_and_keyframes() {
        let mut bundle = CustomizationBundle::default();
        bundle.css_vars.insert("--glow-color".into(), "oklch(0.8 0.3 190)".into());
        bundle.animations.push(Animation {
            name: "pulse".into(),
            kind: AnimationKind::Keyframe,
            definition: AnimationDefinition::Keyframes("@keyframes pulse { }".into()),
            trigger: Trigger::Enter,
        });
        assert_eq!(
            bundle_css(&bundle),
            ":root {\n  --glow-color: oklch(0.8 0.3 190);\n}\n\n@keyframes pulse { }\n"
        );
    }

    #[test]
    fn empty_bundle_has_no_css() {
        assert!(bundle_css(&CustomizationBundle::default()).is_empty());
    }
}

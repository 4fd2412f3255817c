//! Tests for design-token and customization-bundle validation.

use forge_core::errors::ValidationError;
use forge_core::models::tokens::Radius;
use forge_core::models::*;
use serde_json::json;

fn tokens_json() -> serde_json::Value {
    let c = "oklch(0.7 0.2 200)";
    json!({
        "name": "cyberpunk-neon",
        "description": "Neon-drenched dark interface with sharp edges.",
        "colors": {
            "primary": c, "primaryForeground": "oklch(0.1 0 0)",
            "secondary": c, "secondaryForeground": c,
            "muted": c, "mutedForeground": c,
            "accent": c, "accentForeground": c,
            "destructive": "oklch(0.6 0.25 25)", "destructiveForeground": c,
            "background": "oklch(0.98 0.01 240)", "foreground": "oklch(0.15 0.02 240)",
            "card": c, "cardForeground": c,
            "popover": c, "popoverForeground": c,
            "border": c, "input": c, "ring": c,
            "chart1": "oklch(0.5 0.1 280)"
        },
        "darkColors": {
            "background": "oklch(0.1 0 0)",
            "foreground": "oklch(1 0 0)",
            "primary": "oklch(0.8 0.3 190)"
        },
        "fonts": { "heading": "Orbitron, sans-serif", "body": "Inter, sans-serif", "mono": "JetBrains Mono, monospace" },
        "radius": "0.25rem"
    })
}

#[test]
fn test_valid_tokens_parse() {
    let tokens = DesignTokens::from_json(&tokens_json().to_string()).unwrap();
    assert_eq!(tokens.name, "cyberpunk-neon");
    assert_eq!(tokens.radius, Radius::Rem(0.25));
    assert_eq!(tokens.colors.roles().len(), 20, "19 required + chart1");
    let dark: Vec<_> = tokens.dark_colors.declared().into_iter().map(|(n, _)| n).collect();
    assert_eq!(dark, vec!["background", "foreground", "primary"]);
}

#[test]
fn test_missing_required_role_is_rejected() {
    let mut value = tokens_json();
    value["colors"].as_object_mut().unwrap().remove("ring");
    let err = DesignTokens::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidJson(_)));
}

#[test]
fn test_bad_color_grammar_is_rejected() {
    let mut value = tokens_json();
    value["colors"]["primary"] = json!("#00ffff");
    let err = DesignTokens::from_json(&value.to_string()).unwrap_err();
    assert!(err.to_string().contains("#00ffff"));
}

#[test]
fn test_name_description_and_radius_rules() {
    let mut value = tokens_json();
    value["name"] = json!("Cyberpunk Neon");
    assert!(matches!(
        DesignTokens::from_json(&value.to_string()),
        Err(ValidationError::InvalidField { .. })
    ));

    let mut value = tokens_json();
    value["description"] = json!("short");
    assert!(DesignTokens::from_json(&value.to_string()).is_err());

    for ok in ["0", "1rem", "0.75rem", "9999px"] {
        assert!(ok.parse::<Radius>().is_ok(), "{ok}");
    }
    for bad in ["8px", "rem", "-1rem", "1.5em"] {
        assert!(bad.parse::<Radius>().is_err(), "{bad}");
    }
}

#[test]
fn test_empty_bundle_is_valid_noop() {
    let bundle = CustomizationBundle::from_json("{}").unwrap();
    assert!(bundle.is_empty());
    assert!(!bundle.needs_motion_import());
}

#[test]
fn test_bundle_accepts_generator_vocabulary() {
    let payload = json!({
        "cssVars": { "glow": "0 0 8px var(--primary)" },
        "animations": [
            { "name": "neon-pulse", "type": "css-keyframes", "definition": "@keyframes neon-pulse {}", "appliesTo": "enter" },
            { "name": "pop", "type": "framer-motion", "definition": { "scale": 1.05 }, "appliesTo": "hover" }
        ],
        "variants": [ { "name": "neon", "classes": "border-primary shadow-lg" } ],
        "codeModifications": [ { "target": "button", "action": "add-class", "value": "glow" } ]
    });
    let bundle = CustomizationBundle::from_json(&payload.to_string()).unwrap();
    assert_eq!(bundle.animations[0].kind, AnimationKind::Keyframe);
    assert_eq!(bundle.animations[1].kind, AnimationKind::MotionConfig);
    assert_eq!(bundle.animations[1].trigger, Trigger::Hover);
    assert!(bundle.needs_motion_import());
    assert_eq!(bundle.code_modifications[0].action, ModificationAction::AddClass);
}

#[test]
fn test_bundle_serialization_round_trips() {
    let payload = json!({
        "animations": [
            { "name": "pop", "kind": "motion-config", "definition": { "scale": 1.05 }, "trigger": "tap" }
        ],
        "codeModifications": [ { "target": "Card", "action": "wrap-element", "value": "motion.div" } ]
    });
    let bundle = CustomizationBundle::from_json(&payload.to_string()).unwrap();
    let text = serde_json::to_string(&bundle).unwrap();
    let back: CustomizationBundle = serde_json::from_str(&text).unwrap();
    assert_eq!(bundle, back);
}

#[test]
fn test_unknown_action_is_rejected_before_mutation() {
    let payload = json!({
        "codeModifications": [ { "target": "button", "action": "remove-class", "value": "x" } ]
    });
    let err = CustomizationBundle::from_json(&payload.to_string()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownVariant { field: "action", value: "remove-class".into() }
    );
}

#[test]
fn test_unknown_animation_kind_and_empty_target_are_rejected() {
    let payload = json!({
        "animations": [ { "name": "x", "kind": "gsap", "definition": "", "trigger": "enter" } ]
    });
    assert!(matches!(
        CustomizationBundle::from_json(&payload.to_string()),
        Err(ValidationError::UnknownVariant { field: "animation kind", .. })
    ));

    let payload = json!({
        "codeModifications": [ { "target": "  ", "action": "add-class", "value": "x" } ]
    });
    assert!(matches!(
        CustomizationBundle::from_json(&payload.to_string()),
        Err(ValidationError::InvalidField { .. })
    ));
}

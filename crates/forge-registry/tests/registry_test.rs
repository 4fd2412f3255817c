//! Theme CSS and registry document assembly.

use forge_core::config::RegistryConfig;
use forge_core::errors::RegistryError;
use forge_core::models::DesignTokens;
use forge_registry::registry::{REGISTRY_ITEM_SCHEMA, REGISTRY_SCHEMA};
use forge_registry::{
    build_component_item, build_registry, build_style_item, theme_css, ItemType,
};
use serde_json::{json, Value};

fn tokens() -> DesignTokens {
    let c = "oklch(0.7 0.2 200)";
    let value = json!({
        "name": "cyberpunk-neon",
        "description": "Neon-drenched dark interface with sharp edges.",
        "colors": {
            "primary": "oklch(0.75 0.18 195)", "primaryForeground": "oklch(0.1 0 0)",
            "secondary": c, "secondaryForeground": c,
            "muted": c, "mutedForeground": c,
            "accent": c, "accentForeground": c,
            "destructive": "oklch(0.6 0.25 25)", "destructiveForeground": c,
            "background": "oklch(0.98 0.01 240)", "foreground": "oklch(0.15 0.02 240)",
            "card": c, "cardForeground": c,
            "popover": c, "popoverForeground": c,
            "border": c, "input": c, "ring": c
        },
        "darkColors": {
            "background": "oklch(0.1 0 0)",
            "foreground": "oklch(1 0 0)",
            "card": "oklch(0.2 0.01 240)"
        },
        "fonts": { "heading": "Orbitron, sans-serif", "body": "Inter, sans-serif", "mono": "JetBrains Mono, monospace" },
        "radius": "0.25rem"
    });
    DesignTokens::from_json(&value.to_string()).expect("valid tokens")
}

#[test]
fn theme_css_has_root_dark_and_font_blocks() {
    let css = theme_css(&tokens());
    assert!(css.starts_with(":root {\n  --radius: 0.25rem;\n  --primary: oklch(0.75 0.18 195);\n"));
    assert!(css.contains("\n.dark {\n  --background: oklch(0.1 0 0);\n  --foreground: oklch(1 0 0);\n  --card: oklch(0.2 0.01 240);\n}\n"));
    assert!(css.contains("@theme inline {\n  --font-sans: Inter, sans-serif;\n"));
    assert_eq!(css.matches("--ring:").count(), 1, "ring only in :root");
    assert!(!css.contains("chart"));
}

#[test]
fn style_item_carries_css_vars() {
    let item = build_style_item(&tokens(), &RegistryConfig::default());
    let value: Value = serde_json::from_str(&item.to_json().unwrap()).unwrap();
    assert_eq!(value["$schema"], REGISTRY_ITEM_SCHEMA);
    assert_eq!(value["name"], "style");
    assert_eq!(value["type"], "registry:style");
    assert_eq!(value["dependencies"], json!(["framer-motion", "clsx", "tailwind-merge"]));
    assert_eq!(value["registryDependencies"], json!(["utils"]));
    assert_eq!(value["cssVars"]["theme"]["font-heading"], "Orbitron, sans-serif");
    assert_eq!(value["cssVars"]["light"]["radius"], "0.25rem");
    assert_eq!(value["cssVars"]["light"]["primary-foreground"], "oklch(0.1 0 0)");
    assert_eq!(value["cssVars"]["light"].as_object().unwrap().len(), 20);
    assert_eq!(value["cssVars"]["dark"]["card"], "oklch(0.2 0.01 240)");
    assert!(value["cssVars"]["dark"].get("primary").is_none());
    assert_eq!(value["files"], json!([]));
}

#[test]
fn light_vars_keep_declaration_order() {
    let item = build_style_item(&tokens(), &RegistryConfig::default());
    let light = item.css_vars.unwrap().light;
    let keys: Vec<_> = light.keys().take(3).cloned().collect();
    assert_eq!(keys, vec!["radius", "primary", "primary-foreground"]);
}

#[test]
fn component_item_embeds_the_file() {
    let code = "export function Button() { return <button /> }\n";
    let config = RegistryConfig {
        component_path_prefix: Some("registry/new-york/".into()),
        ..RegistryConfig::default()
    };
    let item = build_component_item(
        "neon-button",
        code,
        vec!["framer-motion".into()],
        vec!["utils".into()],
        &config,
    )
    .unwrap();
    assert_eq!(item.item_type, ItemType::Ui);
    assert_eq!(item.files.len(), 1);
    assert_eq!(item.files[0].path, "registry/new-york/neon-button/neon-button.tsx");
    assert_eq!(item.files[0].content.as_deref(), Some(code));

    let value: Value = serde_json::from_str(&item.to_json().unwrap()).unwrap();
    assert_eq!(value["files"][0]["type"], "registry:ui");
    assert!(value.get("cssVars").is_none());
}

#[test]
fn component_names_must_be_kebab_case() {
    let err = build_component_item("NeonButton", "", vec![], vec![], &RegistryConfig::default())
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidItemName(ref n) if n == "NeonButton"));
}

#[test]
fn registry_document_round_trips() {
    let config = RegistryConfig::default();
    let items = vec![
        build_style_item(&tokens(), &config),
        build_component_item("button", "<button />", vec![], vec![], &config).unwrap(),
    ];
    let registry = build_registry("cyberpunk-neon", Some("https://example.com"), items);
    let json = registry.to_json().unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["$schema"], REGISTRY_SCHEMA);
    assert_eq!(value["homepage"], "https://example.com");
    assert_eq!(value["items"].as_array().unwrap().len(), 2);

    let parsed: forge_registry::Registry = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, registry);
    assert!(parsed.item("button").is_some());
    assert!(parsed.item("card").is_none());
}

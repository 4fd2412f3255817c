//! CSS and motion output generated from a bundle's animations.

use forge_core::models::{Animation, AnimationDefinition, AnimationKind, Trigger};
use serde_json::{Map, Value};

/// Keyframe definitions of all keyframe animations, separated by a blank line.
pub fn css_keyframes(animations: &[Animation]) -> String {
    animations
        .iter()
        .filter(|a| a.kind == AnimationKind::Keyframe)
        .filter_map(|a| match &a.definition {
            AnimationDefinition::Keyframes(css) if !css.trim().is_empty() => Some(css.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Motion variants keyed by trigger (`enter`, `hover`, ...). A later
/// animation for the same trigger replaces an earlier one.
pub fn motion_variants(animations: &[Animation]) -> Map<String, Value> {
    let mut variants = Map::new();
    for animation in animations {
        if animation.kind != AnimationKind::MotionConfig {
            continue;
        }
        if let AnimationDefinition::Motion(config) = &animation.definition {
            variants.insert(
                animation.trigger.as_str().to_string(),
                Value::Object(config.clone()),
            );
        }
    }
    variants
}

/// Tailwind utility classes that run keyframe animations: `hover:animate-*`
/// for hover triggers, `animate-*` for enter triggers.
pub fn animation_classes(animations: &[Animation]) -> Vec<String> {
    animations
        .iter()
        .filter(|a| a.kind == AnimationKind::Keyframe)
        .filter_map(|a| match a.trigger {
            Trigger::Hover => Some(format!("hover:animate-{}", a.name)),
            Trigger::Enter => Some(format!("animate-{}", a.name)),
            _ => None,
        })
        .collect()
}

const PRESETS: &[(&str, Trigger, &str)] = &[
    (
        "glitch",
        Trigger::Hover,
        "@keyframes glitch {
  0%, 100% { transform: translate(0); }
  20% { transform: translate(-2px, 2px); }
  40% { transform: translate(-2px, -2px); }
  60% { transform: translate(2px, 2px); }
  80% { transform: translate(2px, -2px); }
}",
    ),
    (
        "neon-pulse",
        Trigger::Enter,
        "@keyframes neon-pulse {
  0%, 100% { box-shadow: 0 0 5px var(--primary); }
  50% { box-shadow: 0 0 20px var(--primary), 0 0 40px var(--primary); }
}",
    ),
    (
        "fade-in",
        Trigger::Enter,
        "@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}",
    ),
    (
        "slide-up",
        Trigger::Enter,
        "@keyframes slide-up {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(0); }
}",
    ),
    (
        "bounce",
        Trigger::Hover,
        "@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-5px); }
}",
    ),
    (
        "wiggle",
        Trigger::Hover,
        "@keyframes wiggle {
  0%, 100% { transform: rotate(0deg); }
  25% { transform: rotate(-3deg); }
  75% { transform: rotate(3deg); }
}",
    ),
];

/// Built-in keyframe animations.
pub fn presets() -> Vec<Animation> {
    PRESETS
        .iter()
        .map(|&(name, trigger, css)| Animation {
            name: name.to_string(),
            kind: AnimationKind::Keyframe,
            definition: AnimationDefinition::Keyframes(css.to_string()),
            trigger,
        })
        .collect()
}

/// Look up a preset by name.
pub fn preset(name: &str) -> Option<Animation> {
    presets().into_iter().find(|a| a.name == name)
}

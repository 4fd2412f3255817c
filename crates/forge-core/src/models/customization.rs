//! Component customization bundles: the validated instruction set driving a transform.
//!
//! Payloads arrive as loosely-typed JSON from the upstream generator. They are
//! decoded into `Raw*` shapes first and then converted into the typed model,
//! so every enumerated field gets an explicit rejection path instead of being
//! trusted as a free-form string.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ValidationError;

/// Four independently optional lists. An empty bundle is a valid no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBundle")]
pub struct CustomizationBundle {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub css_vars: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<Animation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub code_modifications: Vec<CodeModification>,
}

impl CustomizationBundle {
    /// Decode and validate a generator payload.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let raw: RawBundle =
            serde_json::from_str(json).map_err(|e| ValidationError::InvalidJson(e.to_string()))?;
        raw.try_into()
    }

    pub fn is_empty(&self) -> bool {
        self.css_vars.is_empty()
            && self.animations.is_empty()
            && self.variants.is_empty()
            && self.code_modifications.is_empty()
    }

    /// True when any animation needs the motion library imported.
    pub fn needs_motion_import(&self) -> bool {
        self.animations
            .iter()
            .any(|a| a.kind == AnimationKind::MotionConfig)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    pub kind: AnimationKind,
    pub definition: AnimationDefinition,
    pub trigger: Trigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    Keyframe,
    MotionConfig,
}

impl FromStr for AnimationKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyframe" | "css-keyframes" => Ok(Self::Keyframe),
            "motion-config" | "framer-motion" => Ok(Self::MotionConfig),
            other => Err(ValidationError::UnknownVariant {
                field: "animation kind",
                value: other.to_string(),
            }),
        }
    }
}

/// Raw keyframe text or a motion configuration object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnimationDefinition {
    Keyframes(String),
    Motion(Map<String, Value>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Enter,
    Exit,
    Hover,
    Tap,
    Custom,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
            Self::Hover => "hover",
            Self::Tap => "tap",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for Trigger {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enter" => Ok(Self::Enter),
            "exit" => Ok(Self::Exit),
            "hover" => Ok(Self::Hover),
            "tap" => Ok(Self::Tap),
            "custom" => Ok(Self::Custom),
            other => Err(ValidationError::UnknownVariant {
                field: "animation trigger",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub classes: String,
}

/// One tree edit: `action` applied with `value` to every element whose name
/// contains `target` (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeModification {
    pub target: String,
    pub action: ModificationAction,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModificationAction {
    AddClass,
    AddProp,
    WrapElement,
}

impl ModificationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddClass => "add-class",
            Self::AddProp => "add-prop",
            Self::WrapElement => "wrap-element",
        }
    }
}

impl fmt::Display for ModificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModificationAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add-class" => Ok(Self::AddClass),
            "add-prop" => Ok(Self::AddProp),
            "wrap-element" => Ok(Self::WrapElement),
            other => Err(ValidationError::UnknownVariant {
                field: "action",
                value: other.to_string(),
            }),
        }
    }
}

// ---- Boundary decoding ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBundle {
    #[serde(default)]
    css_vars: Option<BTreeMap<String, String>>,
    #[serde(default)]
    animations: Option<Vec<RawAnimation>>,
    #[serde(default)]
    variants: Option<Vec<Variant>>,
    #[serde(default)]
    code_modifications: Option<Vec<RawModification>>,
}

#[derive(Debug, Deserialize)]
struct RawAnimation {
    name: String,
    #[serde(alias = "type")]
    kind: String,
    definition: Value,
    #[serde(alias = "appliesTo")]
    trigger: String,
}

#[derive(Debug, Deserialize)]
struct RawModification {
    target: String,
    action: String,
    value: String,
}

impl TryFrom<RawBundle> for CustomizationBundle {
    type Error = ValidationError;

    fn try_from(raw: RawBundle) -> Result<Self, Self::Error> {
        let animations = raw
            .animations
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, a)| decode_animation(i, a))
            .collect::<Result<Vec<_>, _>>()?;

        let code_modifications = raw
            .code_modifications
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, m)| decode_modification(i, m))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            css_vars: raw.css_vars.unwrap_or_default(),
            animations,
            variants: raw.variants.unwrap_or_default(),
            code_modifications,
        })
    }
}

fn decode_animation(index: usize, raw: RawAnimation) -> Result<Animation, ValidationError> {
    let kind = raw.kind.parse::<AnimationKind>()?;
    let trigger = raw.trigger.parse::<Trigger>()?;
    let definition = match raw.definition {
        Value::String(text) => AnimationDefinition::Keyframes(text),
        Value::Object(map) => AnimationDefinition::Motion(map),
        _ => {
            return Err(ValidationError::field(
                format!("animations[{index}].definition"),
                "must be keyframe text or a configuration object",
            ))
        }
    };
    if raw.name.trim().is_empty() {
        return Err(ValidationError::field(
            format!("animations[{index}].name"),
            "must not be empty",
        ));
    }
    Ok(Animation {
        name: raw.name,
        kind,
        definition,
        trigger,
    })
}

fn decode_modification(
    index: usize,
    raw: RawModification,
) -> Result<CodeModification, ValidationError> {
    let action = raw.action.parse::<ModificationAction>()?;
    if raw.target.trim().is_empty() {
        return Err(ValidationError::field(
            format!("codeModifications[{index}].target"),
            "must not be empty",
        ));
    }
    Ok(CodeModification {
        target: raw.target,
        action,
        value: raw.value,
    })
}

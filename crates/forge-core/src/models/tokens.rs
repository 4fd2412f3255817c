//! Design tokens: the theme produced once per generation request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::OklchColor;
use crate::errors::ValidationError;
use crate::utils::is_kebab_case;

pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Complete theme description. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub name: String,
    pub description: String,
    pub colors: ColorPalette,
    pub dark_colors: DarkColorOverrides,
    pub fonts: FontSet,
    pub radius: Radius,
}

impl DesignTokens {
    /// Parse and validate a generator payload.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let tokens: Self =
            serde_json::from_str(json).map_err(|e| ValidationError::InvalidJson(e.to_string()))?;
        tokens.validate()?;
        Ok(tokens)
    }

    /// Checks the invariants serde cannot express. Colors and radius are
    /// already checked during deserialization.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_kebab_case(&self.name) {
            return Err(ValidationError::field("name", "must be kebab-case"));
        }
        let len = self.description.chars().count();
        if !(DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len) {
            return Err(ValidationError::field(
                "description",
                format!("must be {DESCRIPTION_MIN_CHARS}-{DESCRIPTION_MAX_CHARS} characters, got {len}"),
            ));
        }
        for (role, family) in [
            ("heading", &self.fonts.heading),
            ("body", &self.fonts.body),
            ("mono", &self.fonts.mono),
        ] {
            if family.trim().is_empty() {
                return Err(ValidationError::field(format!("fonts.{role}"), "must not be empty"));
            }
        }
        Ok(())
    }
}

/// Light palette: 19 required roles plus 5 optional chart colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: OklchColor,
    pub primary_foreground: OklchColor,
    pub secondary: OklchColor,
    pub secondary_foreground: OklchColor,
    pub muted: OklchColor,
    pub muted_foreground: OklchColor,
    pub accent: OklchColor,
    pub accent_foreground: OklchColor,
    pub destructive: OklchColor,
    pub destructive_foreground: OklchColor,
    pub background: OklchColor,
    pub foreground: OklchColor,
    pub card: OklchColor,
    pub card_foreground: OklchColor,
    pub popover: OklchColor,
    pub popover_foreground: OklchColor,
    pub border: OklchColor,
    pub input: OklchColor,
    pub ring: OklchColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart1: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart2: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart3: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart4: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart5: Option<OklchColor>,
}

impl ColorPalette {
    /// Declared roles as `(css-variable-name, color)` in a stable order.
    pub fn roles(&self) -> Vec<(&'static str, OklchColor)> {
        let mut roles = vec![
            ("primary", self.primary),
            ("primary-foreground", self.primary_foreground),
            ("secondary", self.secondary),
            ("secondary-foreground", self.secondary_foreground),
            ("muted", self.muted),
            ("muted-foreground", self.muted_foreground),
            ("accent", self.accent),
            ("accent-foreground", self.accent_foreground),
            ("destructive", self.destructive),
            ("destructive-foreground", self.destructive_foreground),
            ("background", self.background),
            ("foreground", self.foreground),
            ("card", self.card),
            ("card-foreground", self.card_foreground),
            ("popover", self.popover),
            ("popover-foreground", self.popover_foreground),
            ("border", self.border),
            ("input", self.input),
            ("ring", self.ring),
        ];
        let charts = [
            ("chart-1", self.chart1),
            ("chart-2", self.chart2),
            ("chart-3", self.chart3),
            ("chart-4", self.chart4),
            ("chart-5", self.chart5),
        ];
        roles.extend(charts.into_iter().filter_map(|(name, c)| c.map(|c| (name, c))));
        roles
    }
}

/// Dark-mode overrides layered onto the light palette by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkColorOverrides {
    pub background: OklchColor,
    pub foreground: OklchColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_foreground: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popover: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popover_foreground: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_foreground: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_foreground: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_foreground: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_foreground: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructive: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<OklchColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring: Option<OklchColor>,
}

impl DarkColorOverrides {
    /// Only the roles actually declared; undeclared roles inherit the light value.
    pub fn declared(&self) -> Vec<(&'static str, OklchColor)> {
        let optional = [
            ("card", self.card),
            ("card-foreground", self.card_foreground),
            ("popover", self.popover),
            ("popover-foreground", self.popover_foreground),
            ("primary", self.primary),
            ("primary-foreground", self.primary_foreground),
            ("secondary", self.secondary),
            ("secondary-foreground", self.secondary_foreground),
            ("muted", self.muted),
            ("muted-foreground", self.muted_foreground),
            ("accent", self.accent),
            ("accent-foreground", self.accent_foreground),
            ("destructive", self.destructive),
            ("border", self.border),
            ("input", self.input),
            ("ring", self.ring),
        ];
        let mut roles = vec![("background", self.background), ("foreground", self.foreground)];
        roles.extend(optional.into_iter().filter_map(|(name, c)| c.map(|c| (name, c))));
        roles
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    pub heading: String,
    pub body: String,
    pub mono: String,
}

/// Corner radius: `0`, `<number>rem` or the pill value `9999px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Radius {
    Zero,
    Rem(f64),
    Pill,
}

impl FromStr for Radius {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::field("radius", format!("`{s}` is not 0, <number>rem or 9999px"));
        match s {
            "0" => Ok(Self::Zero),
            "9999px" => Ok(Self::Pill),
            _ => {
                let number = s.strip_suffix("rem").ok_or_else(invalid)?;
                if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
                    return Err(invalid());
                }
                number.parse::<f64>().map(Self::Rem).map_err(|_| invalid())
            }
        }
    }
}

impl TryFrom<String> for Radius {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Radius> for String {
    fn from(radius: Radius) -> Self {
        radius.to_string()
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            Self::Rem(n) => write!(f, "{n}rem"),
            Self::Pill => f.write_str("9999px"),
        }
    }
}

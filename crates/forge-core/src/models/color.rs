//! OKLCH perceptual colors in the fixed `oklch(L C H)` grammar.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

static OKLCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^oklch\(([\d.]+)\s+([\d.]+)\s+([\d.]+)\)$").expect("static regex")
});

pub const MAX_CHROMA: f64 = 0.4;

/// A color with lightness in `[0, 1]`, chroma in `[0, 0.4]` and hue in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OklchColor {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl OklchColor {
    pub fn new(l: f64, c: f64, h: f64) -> Result<Self, ValidationError> {
        let color = Self { l, c, h };
        color.check_ranges()?;
        Ok(color)
    }

    /// True when `s` matches the grammar and every channel is in range.
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }

    fn check_ranges(&self) -> Result<(), ValidationError> {
        let invalid = |message: &str| ValidationError::InvalidColor {
            value: self.to_string(),
            message: message.to_string(),
        };
        if !(0.0..=1.0).contains(&self.l) {
            return Err(invalid("lightness must be between 0 and 1"));
        }
        if !(0.0..=MAX_CHROMA).contains(&self.c) {
            return Err(invalid("chroma must be between 0 and 0.4"));
        }
        if !(0.0..360.0).contains(&self.h) {
            return Err(invalid("hue must be in [0, 360)"));
        }
        Ok(())
    }
}

impl FromStr for OklchColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| ValidationError::InvalidColor {
            value: s.to_string(),
            message: message.to_string(),
        };
        let caps = OKLCH_RE
            .captures(s)
            .ok_or_else(|| invalid("expected oklch(L C H)"))?;
        let channel = |i: usize| -> Result<f64, ValidationError> {
            caps[i]
                .parse::<f64>()
                .map_err(|_| invalid("channel is not a number"))
        };
        let color = Self {
            l: channel(1)?,
            c: channel(2)?,
            h: channel(3)?,
        };
        color.check_ranges()?;
        Ok(color)
    }
}

impl TryFrom<String> for OklchColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OklchColor> for String {
    fn from(color: OklchColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for OklchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {})", self.l, self.c, self.h)
    }
}

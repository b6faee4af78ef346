//! Customization panel field values.

use pigment::Color;
use serde::{Deserialize, Serialize};

/// Font stack the panel resets to.
pub const DEFAULT_FONT_STACK: &str = "'Segoe UI', Tahoma, Geneva, Verdana, sans-serif";

/// One logical field of the customization panel.
///
/// Color fields are edited through two controls (picker and text); the
/// others through one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    PrimaryColor,
    SecondaryColor,
    SuccessColor,
    FontFamily,
    BorderRadius,
    ShadowIntensity,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::PrimaryColor,
        Self::SecondaryColor,
        Self::SuccessColor,
        Self::FontFamily,
        Self::BorderRadius,
        Self::ShadowIntensity,
    ];

    pub const fn is_color(self) -> bool {
        matches!(
            self,
            Self::PrimaryColor | Self::SecondaryColor | Self::SuccessColor
        )
    }
}

/// Current value of every panel field, as the controls report them.
///
/// Values are kept as text. Slider values are the raw slider strings, so a
/// radius of `"8"` previews as `8px`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizationFieldState {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub font_family: String,
    pub border_radius: String,
    pub shadow_intensity: String,
}

impl Default for CustomizationFieldState {
    fn default() -> Self {
        Self {
            primary: Color::from("#4361ee"),
            secondary: Color::from("#f72585"),
            success: Color::from("#4cc9f0"),
            font_family: DEFAULT_FONT_STACK.to_string(),
            border_radius: "8".to_string(),
            shadow_intensity: "15".to_string(),
        }
    }
}

impl CustomizationFieldState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PrimaryColor => self.primary.as_str(),
            Field::SecondaryColor => self.secondary.as_str(),
            Field::SuccessColor => self.success.as_str(),
            Field::FontFamily => &self.font_family,
            Field::BorderRadius => &self.border_radius,
            Field::ShadowIntensity => &self.shadow_intensity,
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::PrimaryColor => self.primary = Color::from(value),
            Field::SecondaryColor => self.secondary = Color::from(value),
            Field::SuccessColor => self.success = Color::from(value),
            Field::FontFamily => self.font_family = value.to_string(),
            Field::BorderRadius => self.border_radius = value.to_string(),
            Field::ShadowIntensity => self.shadow_intensity = value.to_string(),
        }
    }

    /// Border radius as a CSS length, e.g. `8px`. Also the slider's label.
    pub fn radius(&self) -> String {
        format!("{}px", self.border_radius)
    }

    /// Shadow slider normalized to `0.0..=1.0` (slider units are 0-100).
    ///
    /// The text converts like a script `Number`: blank reads as 0, `0x`
    /// prefixes are hex, and anything else non-numeric is NaN and propagates
    /// into the shadow values.
    pub fn shadow_ratio(&self) -> f64 {
        number_from_text(&self.shadow_intensity) / 100.0
    }

    pub fn shadow_level(&self) -> ShadowLevel {
        ShadowLevel::from_slider(&self.shadow_intensity)
    }
}

/// Label shown next to the shadow slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowLevel {
    VeryLight,
    Medium,
    Strong,
}

impl ShadowLevel {
    /// Classify a raw slider value: below 10, below 20, or anything else.
    ///
    /// The leading integer is used, so `"12.9"` is 12. Text with no leading
    /// integer is `Strong`.
    pub fn from_slider(raw: &str) -> Self {
        match leading_int(raw) {
            Some(v) if v < 10 => Self::VeryLight,
            Some(v) if v < 20 => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLight => "Very Light",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

fn is_space(c: char) -> bool {
    c != '\u{85}' && (c.is_whitespace() || c == '\u{feff}')
}

/// Integer prefix of `raw`, read the way `parseInt` without a radix does:
/// optional sign, then `0x` hex digits or decimal digits.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start_matches(is_space);
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    i64::from_str_radix(&digits[..end], radix)
        .ok()
        .map(|v| sign * v)
}

/// Whole-string numeric conversion with script `Number` rules.
fn number_from_text(raw: &str) -> f64 {
    let s = raw.trim_matches(is_space);
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return f64::NAN;
            }
            return digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
        }
    }
    // Decimal literals only; rejects the `inf`/`nan` spellings `f64` accepts.
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

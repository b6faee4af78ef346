//! Color values and strict hex parsing.
//!
//! - [`Color`] keeps the raw text of a color control; it is never rejected
//! - [`Rgb`] is a parsed color, produced by [`parse_hex`] or [`Color::as_rgb`]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by strict color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was empty or only whitespace.
    #[error("color string is empty")]
    Empty,

    /// The input is not a `#rgb` or `#rrggbb` hex color.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

/// A specialized [`Result`] type for color parsing.
pub type Result<T> = std::result::Result<T, ColorError>;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into `0xRRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack the low 24 bits of `value`.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.to_u32())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex(s)
    }
}

/// Parse a `#rgb` or `#rrggbb` color. The leading `#` is optional.
///
/// # Errors
///
/// Returns [`ColorError::Empty`] for blank input and
/// [`ColorError::InvalidHex`] for anything else that is not a hex color.
pub fn parse_hex(s: &str) -> Result<Rgb> {
    let raw = s.trim();
    if raw.is_empty() {
        return Err(ColorError::Empty);
    }

    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(raw.to_string()));
    }

    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(raw.to_string()))
    };

    match hex.len() {
        6 => Ok(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => Ok(Rgb::new(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        _ => Err(ColorError::InvalidHex(raw.to_string())),
    }
}

/// A color as entered in a color control.
///
/// The text is kept verbatim, so a half-typed value survives a round trip
/// through the UI. Use [`Color::as_rgb`] or [`Color::is_valid`] to inspect it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Create a new color from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as RGB if this is a hex color.
    pub fn as_rgb(&self) -> Option<Rgb> {
        parse_hex(&self.0).ok()
    }

    /// Returns true if this color parses as a hex color.
    pub fn is_valid(&self) -> bool {
        self.as_rgb().is_some()
    }

    /// Shade this color with [`crate::darken`].
    pub fn darken(&self, percent: f64) -> Self {
        Self(crate::darken(&self.0, percent))
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self(rgb.to_hex())
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        assert_eq!(parse_hex("#4361ee"), Ok(Rgb::new(0x43, 0x61, 0xee)));
        assert_eq!(parse_hex("F72585"), Ok(Rgb::new(0xf7, 0x25, 0x85)));
    }

    #[test]
    fn test_parse_three_digit_hex() {
        assert_eq!(parse_hex("#0f0"), Ok(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_hex("   "), Err(ColorError::Empty));
        assert!(matches!(parse_hex("#12345"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(parse_hex("#gggggg"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(parse_hex("red"), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn test_rgb_hex_is_zero_padded() {
        assert_eq!(Rgb::new(0, 0, 1).to_hex(), "#000001");
        assert_eq!(Rgb::from_u32(0x0010_2ebb).to_hex(), "#102ebb");
    }

    #[test]
    fn test_color_keeps_raw_text() {
        let c = Color::from("#43");
        assert_eq!(c.as_str(), "#43");
        assert!(!c.is_valid());
        assert_eq!(c.to_string(), "#43");
    }

    #[test]
    fn test_color_darken() {
        assert_eq!(Color::from("#4361ee").darken(20.0), Color::from("#102ebb"));
        assert_eq!(Color::from(Rgb::new(0, 0, 0)).darken(10.0).as_str(), "#000000");
    }

    #[test]
    fn test_color_serde_is_plain_string() {
        let c: Color = serde_json::from_str("\"#4cc9f0\"").expect("parse color");
        assert_eq!(c.as_rgb(), Some(Rgb::new(0x4c, 0xc9, 0xf0)));
        assert_eq!(serde_json::to_string(&c).expect("serialize"), "\"#4cc9f0\"");
    }

    #[test]
    fn test_error_display() {
        let e = ColorError::InvalidHex("#zz".into());
        assert_eq!(e.to_string(), "invalid hex color '#zz'");
    }
}

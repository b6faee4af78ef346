//! Darkening of hex colors.
//!
//! The arithmetic reproduces the browser routine the theme preview has
//! always used, so previews computed here and in page script agree to the
//! last digit:
//!
//! 1. Read the text (first `#` removed) as a hex integer, truncated to a
//!    signed 32-bit value.
//! 2. Split into channels with shifts.
//! 3. Subtract [`shade_amount`] from every channel.
//! 4. Clamp: below 1 becomes 0, 255 or more becomes 255.

use crate::color::Rgb;

/// Per-channel amount removed for `percent`: `round(2.55 * percent)`.
///
/// Halves round toward positive infinity.
pub fn shade_amount(percent: f64) -> f64 {
    (2.55 * percent + 0.5).floor()
}

/// Darken `color` by `percent` and return a `#rrggbb` string.
///
/// Always returns seven characters. Negative percentages lighten, clamped
/// at white.
///
/// # Example
///
/// ```rust
/// assert_eq!(pigment::darken("#4361ee", 20.0), "#102ebb");
/// assert_eq!(pigment::darken("#101010", 50.0), "#000000");
/// ```
pub fn darken(color: &str, percent: f64) -> String {
    let packed = parse_int_hex(&color.replacen('#', "", 1));
    let amount = shade_amount(percent);

    let r = f64::from(packed >> 16) - amount;
    let g = f64::from((packed >> 8) & 0xff) - amount;
    let b = f64::from(packed & 0xff) - amount;

    Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b)).to_hex()
}

// NaN lands on 255, matching the comparison chain it replaces.
fn clamp_channel(value: f64) -> u8 {
    if value < 255.0 {
        if value < 1.0 { 0 } else { value as u8 }
    } else {
        255
    }
}

/// Read leading hex digits like `parseInt(text, 16)` followed by a 32-bit
/// integer conversion. No digits reads as zero.
fn parse_int_hex(input: &str) -> i32 {
    let s = input.trim_start();
    let (negative, s) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    };
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    let mut value: u32 = 0;
    for digit in s.chars().map_while(|c| c.to_digit(16)) {
        value = value.wrapping_mul(16).wrapping_add(digit);
    }

    if negative {
        value.wrapping_neg() as i32
    } else {
        value as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_default_primary() {
        assert_eq!(darken("#4361ee", 20.0), "#102ebb");
    }

    #[test]
    fn test_darken_zero_is_identity_for_valid_colors() {
        assert_eq!(darken("#f72585", 0.0), "#f72585");
        assert_eq!(darken("#000000", 0.0), "#000000");
    }

    #[test]
    fn test_darken_clamps_at_black() {
        assert_eq!(darken("#333333", 100.0), "#000000");
        assert_eq!(darken("#ffffff", 100.0), "#000000");
    }

    #[test]
    fn test_darken_channel_of_one_clamps_to_zero() {
        // 0x34 - 51 = 1 survives; only values below 1 clamp.
        assert_eq!(darken("#343434", 20.0), "#010101");
        assert_eq!(darken("#333333", 20.0), "#000000");
    }

    #[test]
    fn test_negative_percent_lightens_and_clamps_at_white() {
        assert_eq!(darken("#f0f0f0", -10.0), "#ffffff");
        assert_eq!(darken("#101010", -10.0), "#292929");
    }

    #[test]
    fn test_short_hex_is_read_as_integer() {
        // "abc" is 0x000abc, not #aabbcc.
        assert_eq!(darken("#abc", 0.0), "#000abc");
    }

    #[test]
    fn test_garbage_reads_leading_digits() {
        assert_eq!(darken("#12zz", 0.0), "#000012");
        assert_eq!(darken("", 0.0), "#000000");
        assert_eq!(darken("blue", 0.0), "#00000b");
    }

    #[test]
    fn test_overlong_hex_wraps_to_32_bits() {
        // 0xffffffff is -1 as i32: red shifts to -1, green/blue stay 255.
        assert_eq!(darken("#ffffffff", 20.0), "#00cccc");
    }

    #[test]
    fn test_nan_percent_saturates() {
        assert_eq!(darken("#4361ee", f64::NAN), "#ffffff");
    }

    #[test]
    fn test_shade_amount_rounding() {
        assert_eq!(shade_amount(20.0), 51.0);
        assert_eq!(shade_amount(10.0), 26.0);
        assert_eq!(shade_amount(0.0), 0.0);
        assert_eq!(shade_amount(100.0), 255.0);
    }
}

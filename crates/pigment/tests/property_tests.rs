#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

use pigment::{Rgb, darken, parse_hex, shade_amount};
use proptest::prelude::*;

fn hex_color() -> impl Strategy<Value = (Rgb, String)> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| {
        let rgb = Rgb::new(r, g, b);
        (rgb, rgb.to_hex())
    })
}

// =============================================================================
// darken invariants
// =============================================================================

proptest! {
    #[test]
    fn darken_output_is_seven_char_hex(
        (_, color) in hex_color(),
        percent in 0u32..=100,
    ) {
        let out = darken(&color, f64::from(percent));
        prop_assert_eq!(out.len(), 7);
        prop_assert!(out.starts_with('#'));
        prop_assert!(parse_hex(&out).is_ok(), "not a hex color: {}", out);
    }

    #[test]
    fn darken_never_brightens_a_channel(
        (original, color) in hex_color(),
        percent in 0u32..=100,
    ) {
        let shaded = parse_hex(&darken(&color, f64::from(percent))).expect("hex output");
        prop_assert!(shaded.r <= original.r);
        prop_assert!(shaded.g <= original.g);
        prop_assert!(shaded.b <= original.b);
    }

    #[test]
    fn darken_subtracts_rounded_amount_or_clamps_to_zero(
        (original, color) in hex_color(),
        percent in 0u32..=100,
    ) {
        let amount = shade_amount(f64::from(percent)) as i32;
        let shaded = parse_hex(&darken(&color, f64::from(percent))).expect("hex output");
        let expect = |c: u8| (i32::from(c) - amount).max(0);
        prop_assert_eq!(i32::from(shaded.r), expect(original.r));
        prop_assert_eq!(i32::from(shaded.g), expect(original.g));
        prop_assert_eq!(i32::from(shaded.b), expect(original.b));
    }

    #[test]
    fn darken_accepts_any_text(s in "\\PC{0,24}", percent in -200.0f64..200.0) {
        let out = darken(&s, percent);
        prop_assert_eq!(out.len(), 7);
    }

    #[test]
    fn darken_ignores_case_and_hash(
        (_, color) in hex_color(),
        percent in 0u32..=100,
    ) {
        let p = f64::from(percent);
        let upper = color.to_uppercase();
        let bare = color.trim_start_matches('#').to_string();
        prop_assert_eq!(darken(&upper, p), darken(&color, p));
        prop_assert_eq!(darken(&bare, p), darken(&color, p));
    }
}

//! CSS variable preview engine.
//!
//! Maps panel field values onto the document-level style variables. The
//! mapping is a pure function ([`derive`]); [`apply`] writes its output into
//! a [`StyleVariableSet`] for the fields whose controls are present.

use pigment::darken;
use tracing::debug;

use crate::fields::{CustomizationFieldState, Field};
use crate::style::{StyleVar, StyleVariableSet};

/// Shadow alphas `(md, lg)` for a slider ratio in `0.0..=1.0`.
pub fn shadow_alphas(ratio: f64) -> (f64, f64) {
    (0.1 + ratio * 0.1, 0.12 + ratio * 0.1)
}

/// Format a number the way a script engine stringifies it.
///
/// Shortest round-trip digits, which `f64`'s `Display` already produces,
/// except for the non-finite spellings.
fn js_number(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Values the variables derived from `field` take, in variable order.
pub fn derive_field(
    fields: &CustomizationFieldState,
    field: Field,
    darken_percent: f64,
) -> Vec<(StyleVar, String)> {
    match field {
        Field::PrimaryColor => {
            let primary = fields.primary.as_str();
            vec![
                (StyleVar::Primary, primary.to_string()),
                (StyleVar::PrimaryDark, darken(primary, darken_percent)),
            ]
        }
        Field::SecondaryColor => vec![(StyleVar::Secondary, fields.secondary.to_string())],
        Field::SuccessColor => vec![(StyleVar::Success, fields.success.to_string())],
        Field::FontFamily => vec![(StyleVar::FontMain, fields.font_family.clone())],
        Field::BorderRadius => {
            let radius = fields.radius();
            let large = format!("calc({radius} * 1.5)");
            vec![(StyleVar::RadiusMd, radius), (StyleVar::RadiusLg, large)]
        }
        Field::ShadowIntensity => {
            let (md, lg) = shadow_alphas(fields.shadow_ratio());
            vec![
                (StyleVar::ShadowMd, format!("0 4px 8px rgba(0, 0, 0, {})", js_number(md))),
                (StyleVar::ShadowLg, format!("0 8px 16px rgba(0, 0, 0, {})", js_number(lg))),
            ]
        }
    }
}

/// Every variable value implied by `fields`.
///
/// # Example
///
/// ```rust
/// use atelier::{preview, CustomizationFieldState, StyleVar};
///
/// let vars = preview::derive(&CustomizationFieldState::default(), 20.0);
/// let get = |var: StyleVar| vars.iter().find(|(v, _)| *v == var).map(|(_, s)| s.as_str());
///
/// assert_eq!(get(StyleVar::PrimaryDark), Some("#102ebb"));
/// assert_eq!(get(StyleVar::RadiusLg), Some("calc(8px * 1.5)"));
/// ```
pub fn derive(fields: &CustomizationFieldState, darken_percent: f64) -> Vec<(StyleVar, String)> {
    Field::ALL
        .into_iter()
        .flat_map(|field| derive_field(fields, field, darken_percent))
        .collect()
}

/// Recompute the variables for every field `available` accepts.
///
/// Fields whose control is missing leave their variables untouched. Returns
/// the variables whose value changed.
pub fn apply(
    fields: &CustomizationFieldState,
    vars: &mut StyleVariableSet,
    darken_percent: f64,
    available: impl Fn(Field) -> bool,
) -> Vec<StyleVar> {
    let mut changed = Vec::new();
    for field in Field::ALL.into_iter().filter(|field| available(*field)) {
        for (var, value) in derive_field(fields, field, darken_percent) {
            if vars.set(var, value) {
                changed.push(var);
            }
        }
    }
    debug!(changed = changed.len(), "preview recomputed");
    changed
}

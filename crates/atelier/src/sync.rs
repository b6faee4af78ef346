//! Color/field synchronizer.
//!
//! Keeps the two controls of a color pair (picker and text input) holding
//! the same value. Text is mirrored as typed; it is not validated first.

use pigment::Color;
use tracing::debug;

use crate::controls::Control;
use crate::surface::Surface;

/// Write `value` into the partner of `control`, if it has one.
///
/// Returns the partner that was written.
pub fn mirror<S: Surface + ?Sized>(surface: &mut S, control: Control, value: &str) -> Option<Control> {
    let partner = control.partner()?;
    if !Color::from(value).is_valid() {
        debug!(control = control.id(), value, "mirroring text that is not a hex color");
    }
    surface.set_value(partner.id(), value);
    Some(partner)
}

/// True if every control `control` depends on is present.
///
/// A color pair needs both members; a slider needs its label.
pub fn is_wired<S: Surface + ?Sized>(surface: &S, control: Control) -> bool {
    surface.has_element(control.id())
        && control.partner().is_none_or(|p| surface.has_element(p.id()))
        && control.label_id().is_none_or(|label| surface.has_element(label))
}

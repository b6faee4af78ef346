//! CSS text serializer.

use std::fmt::Write;

use crate::style::{StyleVar, StyleVariableSet};

/// Variables included in the generated snippet, in output order.
///
/// `radius-lg` and the shadows are derived values and are left out.
pub const SERIALIZED: [StyleVar; 6] = [
    StyleVar::Primary,
    StyleVar::PrimaryDark,
    StyleVar::Secondary,
    StyleVar::Success,
    StyleVar::FontMain,
    StyleVar::RadiusMd,
];

/// Render the effective variable values as a `:root` block.
///
/// # Example
///
/// ```rust
/// use atelier::{serialize, StyleVar, StyleVariableSet};
///
/// let mut vars = StyleVariableSet::new();
/// vars.set(StyleVar::Primary, "#4361ee");
///
/// let css = serialize::css_block(&vars);
/// assert!(css.starts_with(":root {\n    --primary: #4361ee;\n"));
/// assert!(css.contains("    --secondary: ;\n"));
/// assert!(css.ends_with("}"));
/// ```
pub fn css_block(vars: &StyleVariableSet) -> String {
    let mut css = String::from(":root {\n");
    for var in SERIALIZED {
        // Writing to a String cannot fail.
        let _ = writeln!(css, "    {}: {};", var.property(), vars.get(var));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::CustomizationFieldState;
    use crate::preview;

    #[test]
    fn test_default_block() {
        let vars = StyleVariableSet::with_stylesheet(preview::derive(
            &CustomizationFieldState::default(),
            20.0,
        ));
        assert_eq!(
            css_block(&vars),
            ":root {\n\
             \x20   --primary: #4361ee;\n\
             \x20   --primary-dark: #102ebb;\n\
             \x20   --secondary: #f72585;\n\
             \x20   --success: #4cc9f0;\n\
             \x20   --font-main: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;\n\
             \x20   --radius-md: 8px;\n\
             }"
        );
    }

    #[test]
    fn test_derived_values_are_omitted() {
        let mut vars = StyleVariableSet::new();
        vars.set(StyleVar::RadiusLg, "calc(8px * 1.5)");
        vars.set(StyleVar::ShadowMd, "0 4px 8px rgba(0, 0, 0, 0.1)");
        let css = css_block(&vars);
        assert!(!css.contains("radius-lg"));
        assert!(!css.contains("shadow"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut vars = StyleVariableSet::new();
        vars.set(StyleVar::FontMain, "  serif ");
        assert!(css_block(&vars).contains("    --font-main: serif;\n"));
    }
}

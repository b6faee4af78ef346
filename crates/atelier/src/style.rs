//! Document-level style variables.
//!
//! [`StyleVariableSet`] models the custom properties set inline on the
//! document root, layered over the stylesheet's own values. Reads behave
//! like a computed-style lookup: an inline value wins, otherwise the
//! stylesheet value, otherwise the empty string.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::Field;

/// The custom properties the theme preview manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleVar {
    Primary,
    PrimaryDark,
    Secondary,
    Success,
    FontMain,
    RadiusMd,
    RadiusLg,
    ShadowMd,
    ShadowLg,
}

impl StyleVar {
    /// Every managed variable, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Primary,
        Self::PrimaryDark,
        Self::Secondary,
        Self::Success,
        Self::FontMain,
        Self::RadiusMd,
        Self::RadiusLg,
        Self::ShadowMd,
        Self::ShadowLg,
    ];

    /// Variable name without the leading dashes.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryDark => "primary-dark",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::FontMain => "font-main",
            Self::RadiusMd => "radius-md",
            Self::RadiusLg => "radius-lg",
            Self::ShadowMd => "shadow-md",
            Self::ShadowLg => "shadow-lg",
        }
    }

    /// CSS custom property name, e.g. `--primary-dark`.
    pub const fn property(self) -> &'static str {
        match self {
            Self::Primary => "--primary",
            Self::PrimaryDark => "--primary-dark",
            Self::Secondary => "--secondary",
            Self::Success => "--success",
            Self::FontMain => "--font-main",
            Self::RadiusMd => "--radius-md",
            Self::RadiusLg => "--radius-lg",
            Self::ShadowMd => "--shadow-md",
            Self::ShadowLg => "--shadow-lg",
        }
    }

    /// Look up a variable by name, with or without the leading `--`.
    pub fn from_name(name: &str) -> Option<Self> {
        let bare = name.strip_prefix("--").unwrap_or(name);
        Self::ALL.into_iter().find(|var| var.name() == bare)
    }

    /// The panel field this variable is derived from.
    pub const fn source(self) -> Field {
        match self {
            Self::Primary | Self::PrimaryDark => Field::PrimaryColor,
            Self::Secondary => Field::SecondaryColor,
            Self::Success => Field::SuccessColor,
            Self::FontMain => Field::FontFamily,
            Self::RadiusMd | Self::RadiusLg => Field::BorderRadius,
            Self::ShadowMd | Self::ShadowLg => Field::ShadowIntensity,
        }
    }
}

impl fmt::Display for StyleVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

/// Inline style variables over stylesheet defaults.
///
/// # Example
///
/// ```rust
/// use atelier::{StyleVar, StyleVariableSet};
///
/// let mut vars = StyleVariableSet::with_stylesheet([(StyleVar::Primary, "#4361ee")]);
/// assert_eq!(vars.get(StyleVar::Primary), "#4361ee");
/// assert_eq!(vars.get(StyleVar::Success), "");
///
/// vars.set(StyleVar::Primary, "#ff0000");
/// assert_eq!(vars.get(StyleVar::Primary), "#ff0000");
///
/// vars.clear();
/// assert_eq!(vars.get(StyleVar::Primary), "#4361ee");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleVariableSet {
    #[serde(default)]
    inline: BTreeMap<StyleVar, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    stylesheet: BTreeMap<StyleVar, String>,
}

impl StyleVariableSet {
    /// An empty set with no stylesheet defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty set whose reads fall back to `defaults`.
    pub fn with_stylesheet<I, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (StyleVar, V)>,
        V: Into<String>,
    {
        Self {
            inline: BTreeMap::new(),
            stylesheet: defaults.into_iter().map(|(var, v)| (var, v.into())).collect(),
        }
    }

    /// Set an inline value. Returns true if the value changed.
    pub fn set(&mut self, var: StyleVar, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.inline.get(&var) == Some(&value) {
            return false;
        }
        self.inline.insert(var, value);
        true
    }

    /// Remove an inline value, reverting to the stylesheet default.
    pub fn remove(&mut self, var: StyleVar) -> Option<String> {
        self.inline.remove(&var)
    }

    /// Remove every inline value.
    pub fn clear(&mut self) {
        self.inline.clear();
    }

    /// Effective value, trimmed like a computed-style read.
    pub fn get(&self, var: StyleVar) -> &str {
        self.inline
            .get(&var)
            .or_else(|| self.stylesheet.get(&var))
            .map_or("", |v| v.trim())
    }

    /// The inline value only, if set.
    pub fn inline(&self, var: StyleVar) -> Option<&str> {
        self.inline.get(&var).map(String::as_str)
    }

    /// True if an inline value overrides the stylesheet.
    pub fn is_set(&self, var: StyleVar) -> bool {
        self.inline.contains_key(&var)
    }

    /// Inline values in declaration order.
    pub fn iter_inline(&self) -> impl Iterator<Item = (StyleVar, &str)> {
        self.inline.iter().map(|(var, v)| (*var, v.as_str()))
    }

    /// Number of inline values.
    pub fn len(&self) -> usize {
        self.inline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inline.is_empty()
    }
}

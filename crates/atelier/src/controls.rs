//! Element identifiers the page script binds to.
//!
//! The documentation pages are static HTML; these ids and classes are the
//! whole contract between the markup and the behavior in this crate.

use crate::fields::Field;
use crate::notify::NoticeKind;

/// Fixed element ids and marker classes.
pub mod ids {
    /// Class on the customization page's root element.
    pub const CUSTOMIZE_PAGE: &str = "customize-page";
    /// Element whose text shows the generated CSS.
    pub const CSS_OUTPUT: &str = "cssOutput";
    /// Label next to the border-radius slider.
    pub const BORDER_RADIUS_LABEL: &str = "borderRadiusValue";
    /// Label next to the shadow slider.
    pub const SHADOW_INTENSITY_LABEL: &str = "shadowIntensityValue";
    /// Fixed-position container holding notifications; created on demand.
    pub const NOTIFICATION_CONTAINER: &str = "notificationContainer";
    /// Login demo form and its fields.
    pub const LOGIN_FORM: &str = "loginForm";
    pub const LOGIN_EMAIL: &str = "exampleEmail";
    pub const LOGIN_PASSWORD: &str = "examplePassword";
    pub const LOGIN_RESULT: &str = "loginResult";
    /// Class on click-to-copy code samples.
    pub const CODE_BLOCK: &str = "code-block";
}

/// Which DOM event a control reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Input,
    Change,
}

/// An input control on the customization panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    PrimaryColor,
    PrimaryColorText,
    SecondaryColor,
    SecondaryColorText,
    SuccessColor,
    SuccessColorText,
    FontFamily,
    BorderRadius,
    ShadowIntensity,
}

impl Control {
    pub const ALL: [Self; 9] = [
        Self::PrimaryColor,
        Self::PrimaryColorText,
        Self::SecondaryColor,
        Self::SecondaryColorText,
        Self::SuccessColor,
        Self::SuccessColorText,
        Self::FontFamily,
        Self::BorderRadius,
        Self::ShadowIntensity,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::PrimaryColor => "primaryColor",
            Self::PrimaryColorText => "primaryColorText",
            Self::SecondaryColor => "secondaryColor",
            Self::SecondaryColorText => "secondaryColorText",
            Self::SuccessColor => "successColor",
            Self::SuccessColorText => "successColorText",
            Self::FontFamily => "fontFamily",
            Self::BorderRadius => "borderRadius",
            Self::ShadowIntensity => "shadowIntensity",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.id() == id)
    }

    /// The field this control edits.
    pub const fn field(self) -> Field {
        match self {
            Self::PrimaryColor | Self::PrimaryColorText => Field::PrimaryColor,
            Self::SecondaryColor | Self::SecondaryColorText => Field::SecondaryColor,
            Self::SuccessColor | Self::SuccessColorText => Field::SuccessColor,
            Self::FontFamily => Field::FontFamily,
            Self::BorderRadius => Field::BorderRadius,
            Self::ShadowIntensity => Field::ShadowIntensity,
        }
    }

    /// The control that must mirror this one: picker and text swap.
    pub const fn partner(self) -> Option<Self> {
        match self {
            Self::PrimaryColor => Some(Self::PrimaryColorText),
            Self::PrimaryColorText => Some(Self::PrimaryColor),
            Self::SecondaryColor => Some(Self::SecondaryColorText),
            Self::SecondaryColorText => Some(Self::SecondaryColor),
            Self::SuccessColor => Some(Self::SuccessColorText),
            Self::SuccessColorText => Some(Self::SuccessColor),
            Self::FontFamily | Self::BorderRadius | Self::ShadowIntensity => None,
        }
    }

    /// Id of the label element that displays this control's value.
    pub const fn label_id(self) -> Option<&'static str> {
        match self {
            Self::BorderRadius => Some(ids::BORDER_RADIUS_LABEL),
            Self::ShadowIntensity => Some(ids::SHADOW_INTENSITY_LABEL),
            _ => None,
        }
    }

    pub const fn trigger(self) -> Trigger {
        match self {
            Self::FontFamily => Trigger::Change,
            _ => Trigger::Input,
        }
    }

    /// True for the control the preview reads its field from.
    ///
    /// For color fields that is the picker, not the text input.
    pub const fn is_primary(self) -> bool {
        !matches!(
            self,
            Self::PrimaryColorText | Self::SecondaryColorText | Self::SuccessColorText
        )
    }

    /// The control the preview reads `field` from.
    pub const fn for_field(field: Field) -> Self {
        match field {
            Field::PrimaryColor => Self::PrimaryColor,
            Field::SecondaryColor => Self::SecondaryColor,
            Field::SuccessColor => Self::SuccessColor,
            Field::FontFamily => Self::FontFamily,
            Field::BorderRadius => Self::BorderRadius,
            Field::ShadowIntensity => Self::ShadowIntensity,
        }
    }
}

/// A clickable button with behavior attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Apply,
    Reset,
    CopyCss,
    /// One of the notification demo buttons on the examples page.
    ShowDemo(NoticeKind),
}

impl Button {
    pub const ALL: [Self; 7] = [
        Self::Apply,
        Self::Reset,
        Self::CopyCss,
        Self::ShowDemo(NoticeKind::Success),
        Self::ShowDemo(NoticeKind::Warning),
        Self::ShowDemo(NoticeKind::Error),
        Self::ShowDemo(NoticeKind::Info),
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Apply => "applyCustomization",
            Self::Reset => "resetCustomization",
            Self::CopyCss => "copyCss",
            Self::ShowDemo(NoticeKind::Success) => "showSuccess",
            Self::ShowDemo(NoticeKind::Warning) => "showWarning",
            Self::ShowDemo(NoticeKind::Error) => "showError",
            Self::ShowDemo(NoticeKind::Info) => "showInfo",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.id() == id)
    }
}

//! Customization panel controller.
//!
//! [`CustomizePanel`] ties the synchronizer, preview engine and serializer
//! together and implements reset and apply.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::controls::{Control, Trigger, ids};
use crate::fields::{CustomizationFieldState, Field, ShadowLevel};
use crate::preview;
use crate::serialize;
use crate::style::{StyleVar, StyleVariableSet};
use crate::surface::Surface;
use crate::sync;

/// What [`CustomizePanel::apply`] hands to persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub fields: CustomizationFieldState,
    pub vars: StyleVariableSet,
}

/// State of the customization panel on the current page.
#[derive(Debug, Clone)]
pub struct CustomizePanel {
    fields: CustomizationFieldState,
    defaults: CustomizationFieldState,
    vars: StyleVariableSet,
    darken_percent: f64,
    /// Fields whose reading control exists; only these drive the preview.
    present: BTreeSet<Field>,
    /// Controls that react to events.
    wired: BTreeSet<Control>,
}

impl CustomizePanel {
    /// Bind to the panel on `surface`, if this is the customization page.
    ///
    /// Reads the initial control values. Nothing is written until
    /// [`Self::refresh`].
    pub fn detect<S: Surface + ?Sized>(surface: &S, config: &SiteConfig) -> Option<Self> {
        if !surface.has_marker(ids::CUSTOMIZE_PAGE) {
            return None;
        }

        let mut fields = config.defaults.clone();
        let mut present = BTreeSet::new();
        for field in Field::ALL {
            if let Some(value) = surface.value(Control::for_field(field).id()) {
                fields.set(field, &value);
                present.insert(field);
            }
        }

        let wired: BTreeSet<Control> = Control::ALL
            .into_iter()
            .filter(|control| sync::is_wired(surface, *control))
            .collect();

        info!(
            fields = present.len(),
            controls = wired.len(),
            "customization panel detected"
        );

        Some(Self {
            fields,
            defaults: config.defaults.clone(),
            vars: StyleVariableSet::with_stylesheet(preview::derive(
                &config.defaults,
                config.darken_percent,
            )),
            darken_percent: config.darken_percent,
            present,
            wired,
        })
    }

    /// React to an event on `control`. Returns false if the control does
    /// not react to `trigger` or is not wired.
    pub fn handle<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        trigger: Trigger,
        control: Control,
        value: &str,
    ) -> bool {
        if control.trigger() != trigger || !self.wired.contains(&control) {
            return false;
        }

        surface.set_value(control.id(), value);
        sync::mirror(surface, control, value);
        self.fields.set(control.field(), value);

        match control {
            Control::BorderRadius => {
                surface.set_text(ids::BORDER_RADIUS_LABEL, &self.fields.radius());
            }
            Control::ShadowIntensity => {
                surface.set_text(
                    ids::SHADOW_INTENSITY_LABEL,
                    ShadowLevel::from_slider(value).label(),
                );
            }
            _ => {}
        }

        debug!(control = control.id(), value, "panel input");
        self.refresh(surface);
        true
    }

    /// Recompute the preview, push changed variables to the document root,
    /// and regenerate the CSS text.
    pub fn refresh<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let present = &self.present;
        let changed = preview::apply(&self.fields, &mut self.vars, self.darken_percent, |field| {
            present.contains(&field)
        });
        for var in changed {
            if let Some(value) = self.vars.inline(var) {
                surface.set_root_property(var.property(), value);
            }
        }
        self.render_css(surface);
    }

    /// Write the serialized variables into the CSS output element.
    pub fn render_css<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_text(ids::CSS_OUTPUT, &self.css());
    }

    /// Restore the default values, drop every override, and regenerate the
    /// CSS text.
    pub fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.fields = self.defaults.clone();
        for control in Control::ALL {
            surface.set_value(control.id(), self.defaults.get(control.field()));
        }
        surface.set_text(ids::BORDER_RADIUS_LABEL, &self.defaults.radius());
        surface.set_text(ids::SHADOW_INTENSITY_LABEL, self.defaults.shadow_level().label());

        self.vars.clear();
        for var in StyleVar::ALL {
            surface.remove_root_property(var.property());
        }
        self.render_css(surface);
        info!("customization reset");
    }

    /// Capture the current customization for persistence.
    ///
    /// Nothing is stored yet; callers report success unconditionally.
    pub fn apply(&self) -> PanelSnapshot {
        PanelSnapshot {
            fields: self.fields.clone(),
            vars: self.vars.clone(),
        }
    }

    pub fn fields(&self) -> &CustomizationFieldState {
        &self.fields
    }

    pub fn vars(&self) -> &StyleVariableSet {
        &self.vars
    }

    /// The CSS snippet for the current variables.
    pub fn css(&self) -> String {
        serialize::css_block(&self.vars)
    }

    pub fn is_wired(&self, control: Control) -> bool {
        self.wired.contains(&control)
    }
}

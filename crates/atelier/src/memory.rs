//! In-memory [`Surface`] for tests and headless runs.

use std::collections::{BTreeMap, BTreeSet};

use crate::controls::{Button, Control, ids};
use crate::fields::{CustomizationFieldState, Field, ShadowLevel};
use crate::markup;
use crate::notify::NotificationId;
use crate::surface::Surface;

/// Copy button label on a freshly loaded customization page.
pub const COPY_BUTTON_LABEL: &str = r#"<i class="fas fa-copy"></i> Copy CSS"#;

/// An element: a form value and its content.
///
/// Content is stored as given. [`Surface::text`] and [`Surface::markup`]
/// read the same string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub value: String,
    pub content: String,
}

/// A notification node appended to the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationNode {
    pub id: NotificationId,
    pub class: String,
    pub markup: String,
    pub exiting: bool,
}

/// A document held in memory.
///
/// Records every side effect that is not plain element state (root style,
/// notification nodes, clipboard writes) so tests can assert on them.
///
/// # Example
///
/// ```rust
/// use atelier::{MemorySurface, Surface};
///
/// let mut surface = MemorySurface::new().with_value("exampleEmail", "a@b.c");
/// assert_eq!(surface.value("exampleEmail").as_deref(), Some("a@b.c"));
///
/// surface.set_value("missing", "ignored");
/// assert!(!surface.has_element("missing"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    elements: BTreeMap<String, Element>,
    markers: BTreeSet<String>,
    root_style: BTreeMap<String, String>,
    notifications: Vec<NotificationNode>,
    removed: Vec<NotificationId>,
    containers_created: usize,
    clipboard: Vec<String>,
    code: BTreeMap<String, String>,
}

impl MemorySurface {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The customization page as served: marker, every control holding
    /// its default, slider labels, CSS output, and the panel buttons.
    pub fn customize_page() -> Self {
        let defaults = CustomizationFieldState::default();
        let mut surface = Self::new().with_marker(ids::CUSTOMIZE_PAGE);
        for control in Control::ALL {
            surface = surface.with_value(control.id(), defaults.get(control.field()));
        }
        surface
            .with_content(ids::BORDER_RADIUS_LABEL, &defaults.radius())
            .with_content(
                ids::SHADOW_INTENSITY_LABEL,
                ShadowLevel::from_slider(defaults.get(Field::ShadowIntensity)).label(),
            )
            .with_element(ids::CSS_OUTPUT)
            .with_element(Button::Apply.id())
            .with_element(Button::Reset.id())
            .with_content(Button::CopyCss.id(), COPY_BUTTON_LABEL)
    }

    /// The examples page: login demo form and notification demo buttons.
    pub fn examples_page() -> Self {
        let mut surface = Self::new()
            .with_element(ids::LOGIN_FORM)
            .with_element(ids::LOGIN_EMAIL)
            .with_element(ids::LOGIN_PASSWORD)
            .with_element(ids::LOGIN_RESULT);
        for button in Button::ALL {
            if let Button::ShowDemo(_) = button {
                surface = surface.with_element(button.id());
            }
        }
        surface
    }

    /// Add an empty element.
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.entry(id.to_string()).or_default();
        self
    }

    /// Add an element holding a form value.
    #[must_use]
    pub fn with_value(mut self, id: &str, value: &str) -> Self {
        self.elements.entry(id.to_string()).or_default().value = value.to_string();
        self
    }

    /// Add an element holding content.
    #[must_use]
    pub fn with_content(mut self, id: &str, content: &str) -> Self {
        self.elements.entry(id.to_string()).or_default().content = content.to_string();
        self
    }

    /// Add a code block whose inner `code` element holds `code`.
    #[must_use]
    pub fn with_code_block(mut self, id: &str, code: &str) -> Self {
        let html = format!("<pre><code>{}</code></pre>", markup::escape(code));
        self.code.insert(id.to_string(), code.to_string());
        self.with_content(id, &html)
    }

    /// Add a marker class.
    #[must_use]
    pub fn with_marker(mut self, class: &str) -> Self {
        self.markers.insert(class.to_string());
        self
    }

    /// Remove an element, returning it.
    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Inline value of a root custom property.
    pub fn root_property(&self, name: &str) -> Option<&str> {
        self.root_style.get(name).map(String::as_str)
    }

    /// Every inline root custom property.
    pub fn root_style(&self) -> &BTreeMap<String, String> {
        &self.root_style
    }

    /// Notification nodes currently in the container, oldest first.
    pub fn notifications(&self) -> &[NotificationNode] {
        &self.notifications
    }

    pub fn notification(&self, id: NotificationId) -> Option<&NotificationNode> {
        self.notifications.iter().find(|n| n.id == id)
    }

    /// Notification nodes removed so far, in removal order.
    pub fn removed(&self) -> &[NotificationId] {
        &self.removed
    }

    /// How many times the notification container was created.
    pub fn containers_created(&self) -> usize {
        self.containers_created
    }

    /// Every clipboard write, in order.
    pub fn clipboard_writes(&self) -> &[String] {
        &self.clipboard
    }
}

impl Surface for MemorySurface {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn has_marker(&self, class: &str) -> bool {
        self.markers.contains(class)
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.value = value.to_string();
        }
    }

    fn text(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.content.clone())
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.content = text.to_string();
        }
    }

    fn markup(&self, id: &str) -> Option<String> {
        self.text(id)
    }

    fn set_markup(&mut self, id: &str, html: &str) {
        self.set_text(id, html);
    }

    fn code_text(&self, id: &str) -> Option<String> {
        let element = self.elements.get(id)?;
        Some(
            self.code
                .get(id)
                .cloned()
                .unwrap_or_else(|| element.content.clone()),
        )
    }

    fn set_root_property(&mut self, name: &str, value: &str) {
        self.root_style.insert(name.to_string(), value.to_string());
    }

    fn remove_root_property(&mut self, name: &str) {
        self.root_style.remove(name);
    }

    fn create_notification_container(&mut self) {
        self.containers_created += 1;
        self.elements
            .entry(ids::NOTIFICATION_CONTAINER.to_string())
            .or_default();
    }

    fn append_notification(&mut self, id: NotificationId, class: &str, html: &str) {
        if !self.has_element(ids::NOTIFICATION_CONTAINER) {
            return;
        }
        self.notifications.push(NotificationNode {
            id,
            class: class.to_string(),
            markup: html.to_string(),
            exiting: false,
        });
    }

    fn mark_notification_exiting(&mut self, id: NotificationId) {
        if let Some(node) = self.notifications.iter_mut().find(|n| n.id == id) {
            node.exiting = true;
        }
    }

    fn remove_notification(&mut self, id: NotificationId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        let removed = self.notifications.len() != before;
        if removed {
            self.removed.push(id);
        }
        removed
    }

    fn write_clipboard(&mut self, text: &str) {
        self.clipboard.push(text.to_string());
    }
}

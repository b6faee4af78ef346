//! [`Surface`] over the live DOM.

use std::collections::HashMap;

use atelier::{NotificationId, Surface, ids};
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::clipboard;
use crate::dispatch::Dispatch;
use crate::log;

const CONTAINER_STYLE: &str = "position: fixed; top: 20px; right: 20px; z-index: 10000; \
     display: flex; flex-direction: column; gap: 10px; max-width: 400px;";

const NOTIFICATION_STYLE: &str = "animation: slideIn 0.3s ease; box-shadow: var(--shadow-md);";

const EXIT_ANIMATION: &str = "slideOut 0.3s ease";

const ANIMATIONS_ID: &str = "notification-animations";

const ANIMATIONS: &str = "\
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}";

/// The page's document.
#[derive(Debug)]
pub struct DomSurface {
    document: Document,
    nodes: HashMap<NotificationId, Element>,
    dispatch: Dispatch,
}

impl DomSurface {
    pub fn new(document: Document, dispatch: Dispatch) -> Self {
        Self {
            document,
            nodes: HashMap::new(),
            dispatch,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn root_style(&self) -> Option<CssStyleDeclaration> {
        self.document
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|root| root.style())
    }

    fn ensure_animations(&self) {
        if self.element(ANIMATIONS_ID).is_some() {
            return;
        }
        let (Ok(style), Some(head)) = (self.document.create_element("style"), self.document.head())
        else {
            return;
        };
        style.set_id(ANIMATIONS_ID);
        style.set_text_content(Some(ANIMATIONS));
        if let Err(err) = head.append_child(&style) {
            log::warn_js("atelier: could not add notification animations", &err);
        }
    }
}

/// Value of a form control, or `None` if the element is not one.
pub(crate) fn form_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

fn set_form_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

impl Surface for DomSurface {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn has_marker(&self, class: &str) -> bool {
        self.document
            .query_selector(&format!(".{class}"))
            .ok()
            .flatten()
            .is_some()
    }

    fn value(&self, id: &str) -> Option<String> {
        form_value(&self.element(id)?)
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(element) = self.element(id) {
            set_form_value(&element, value);
        }
    }

    fn text(&self, id: &str) -> Option<String> {
        self.element(id)?.text_content()
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn markup(&self, id: &str) -> Option<String> {
        self.element(id).map(|element| element.inner_html())
    }

    fn set_markup(&mut self, id: &str, html: &str) {
        if let Some(element) = self.element(id) {
            element.set_inner_html(html);
        }
    }

    fn code_text(&self, id: &str) -> Option<String> {
        let block = self.element(id)?;
        match block.query_selector("code") {
            Ok(Some(code)) => code.text_content(),
            _ => block.text_content(),
        }
    }

    fn set_root_property(&mut self, name: &str, value: &str) {
        let Some(style) = self.root_style() else {
            return;
        };
        if let Err(err) = style.set_property(name, value) {
            log::warn_js("atelier: could not set root style property", &err);
        }
    }

    fn remove_root_property(&mut self, name: &str) {
        let Some(style) = self.root_style() else {
            return;
        };
        if let Err(err) = style.remove_property(name) {
            log::warn_js("atelier: could not remove root style property", &err);
        }
    }

    fn create_notification_container(&mut self) {
        let (Ok(container), Some(body)) = (self.document.create_element("div"), self.document.body())
        else {
            return;
        };
        container.set_id(ids::NOTIFICATION_CONTAINER);
        if let Err(err) = container
            .set_attribute("style", CONTAINER_STYLE)
            .and_then(|()| body.append_child(&container).map(drop))
        {
            log::warn_js("atelier: could not create notification container", &err);
        }
    }

    fn append_notification(&mut self, id: NotificationId, class: &str, html: &str) {
        let (Some(container), Ok(node)) = (
            self.element(ids::NOTIFICATION_CONTAINER),
            self.document.create_element("div"),
        ) else {
            return;
        };
        // Pages may ship their own container; the keyframes are ours.
        self.ensure_animations();
        node.set_class_name(class);
        node.set_inner_html(html);
        if let Err(err) = node
            .set_attribute("style", NOTIFICATION_STYLE)
            .and_then(|()| container.append_child(&node).map(drop))
        {
            log::warn_js("atelier: could not show notification", &err);
            return;
        }
        self.nodes.insert(id, node);
    }

    fn mark_notification_exiting(&mut self, id: NotificationId) {
        let Some(node) = self.nodes.get(&id).and_then(|n| n.dyn_ref::<HtmlElement>()) else {
            return;
        };
        if let Err(err) = node.style().set_property("animation", EXIT_ANIMATION) {
            log::warn_js("atelier: could not start exit animation", &err);
        }
    }

    fn remove_notification(&mut self, id: NotificationId) -> bool {
        self.nodes.remove(&id).map(|node| node.remove()).is_some()
    }

    fn write_clipboard(&mut self, text: &str) {
        clipboard::write_text(text.to_string(), self.dispatch.clone());
    }
}

//! Delegated document listeners.
//!
//! One listener per event type on the document. Each resolves the element
//! the event concerns and forwards to the matching [`atelier::Site`] handler.

use std::cell::Cell;

use atelier::{NotificationId, ids};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::dispatch::Dispatch;
use crate::dom::form_value;

fn listen(
    document: &Document,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    document.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

thread_local! {
    static NEXT_BLOCK: Cell<u32> = const { Cell::new(0) };
}

/// The id the site addresses a code block by. Blocks without one get a
/// generated id on first click.
fn block_id(block: &Element) -> String {
    let id = block.id();
    if !id.is_empty() {
        return id;
    }
    let n = NEXT_BLOCK.with(|next| next.replace(next.get() + 1));
    let id = format!("atelier-code-block-{n}");
    block.set_id(&id);
    id
}

fn target(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// The id and current value of the control an input event fired on.
fn control(event: &Event) -> Option<(String, String)> {
    let element = target(event)?;
    let id = element.id();
    if id.is_empty() {
        return None;
    }
    Some((id, form_value(&element)?))
}

/// Install every listener the site needs.
///
/// # Errors
///
/// Returns the browser's error if a listener cannot be added.
pub fn install(document: &Document, dispatch: &Dispatch) -> Result<(), JsValue> {
    let d = dispatch.clone();
    listen(document, "input", move |event| {
        if let Some((id, value)) = control(&event) {
            d.with(|site| site.on_input(&id, &value));
        }
    })?;

    let d = dispatch.clone();
    listen(document, "change", move |event| {
        if let Some((id, value)) = control(&event) {
            d.with(|site| site.on_change(&id, &value));
        }
    })?;

    let d = dispatch.clone();
    listen(document, "click", move |event| {
        let Some(element) = target(&event) else {
            return;
        };
        if let Ok(Some(close)) = element.closest(".notification-close") {
            let id = close
                .get_attribute("data-notification-id")
                .and_then(|raw| raw.parse::<NotificationId>().ok());
            if let Some(id) = id {
                d.with(|site| site.on_dismiss(id));
            }
            return;
        }
        if let Ok(Some(block)) = element.closest(&format!(".{}", ids::CODE_BLOCK)) {
            let id = block_id(&block);
            d.with(|site| site.on_code_block_click(&id));
            return;
        }
        if let Ok(Some(owner)) = element.closest("[id]") {
            let id = owner.id();
            d.with(|site| site.on_click(&id));
        }
    })?;

    let d = dispatch.clone();
    listen(document, "submit", move |event| {
        let Some(form) = target(&event) else {
            return;
        };
        let id = form.id();
        if d.with(|site| site.on_submit(&id)) == Some(true) {
            event.prevent_default();
        }
    })?;

    let d = dispatch.clone();
    listen(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            d.with(|site| site.on_key_down(&key));
        }
    })?;

    Ok(())
}

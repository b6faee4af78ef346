//! # atelier-wasm
//!
//! Browser host for the documentation site's interactive behavior.
//!
//! Loading the module binds the page: it reads an optional JSON
//! configuration, installs delegated listeners on the document, and starts
//! the site once the DOM is ready.
//!
//! ## Quick Start (HTML)
//!
//! ```html
//! <script type="application/json" id="atelier-config">
//!   { "timings": { "notification_lifetime_ms": 8000 } }
//! </script>
//! <script type="module">
//!   import init, { showNotification } from './atelier_wasm.js';
//!
//!   await init();
//!   showNotification('Welcome back!', 'success');
//! </script>
//! ```
//!
//! ## Available APIs
//!
//! - `showNotification(message, kind?)` - Show a toast; unknown kinds are `info`
//! - `darkenColor(color, percent)` - The shade routine behind `--primary-dark`
//! - `version()` - Module version

#![forbid(unsafe_code)]

mod clipboard;
mod dispatch;
mod dom;
mod events;
mod log;
mod timers;

use std::cell::RefCell;
use std::rc::Rc;

use atelier::{NoticeKind, Site, SiteConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub use atelier;
pub use dispatch::{BrowserSite, Dispatch};
pub use dom::DomSurface;
pub use timers::BrowserScheduler;

/// Id of the optional `<script type="application/json">` holding a
/// [`SiteConfig`].
pub const CONFIG_ELEMENT: &str = "atelier-config";

thread_local! {
    static SITE: RefCell<Option<Rc<RefCell<BrowserSite>>>> = const { RefCell::new(None) };
}

/// Initialize the module and bind the page.
///
/// Runs automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let ready = Closure::once_into_js(move || {
            if let Err(err) = boot(&window) {
                log::warn_js("atelier: could not start", &err);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())?;
        Ok(())
    } else {
        boot(&window)
    }
}

fn boot(window: &Window) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let config = load_config(&document);

    let site = Rc::new_cyclic(|weak| {
        let dispatch = Dispatch::new(weak.clone());
        RefCell::new(Site::new(
            DomSurface::new(document.clone(), dispatch.clone()),
            BrowserScheduler::new(window.clone(), dispatch),
            config,
        ))
    });

    events::install(&document, &Dispatch::new(Rc::downgrade(&site)))?;
    site.borrow_mut().start();
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
    Ok(())
}

/// Read the page's configuration. Missing or invalid configuration falls
/// back to the defaults.
fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT)
        .and_then(|element| element.text_content())
    else {
        return SiteConfig::default();
    };

    SiteConfig::from_json_str(&raw).unwrap_or_else(|err| {
        log::warn(&format!("atelier: ignoring page configuration: {err}"));
        SiteConfig::default()
    })
}

fn with_site<R>(f: impl FnOnce(&mut BrowserSite) -> R) -> Option<R> {
    let dispatch = SITE.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|site| Dispatch::new(Rc::downgrade(site)))
    })?;
    dispatch.with(f)
}

/// Show a notification. `kind` is one of `success`, `warning`, `error` or
/// `info`; anything else shows as `info`.
#[wasm_bindgen(js_name = "showNotification")]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = kind.as_deref().map_or(NoticeKind::Info, NoticeKind::parse);
    if with_site(|site| site.notify(message, kind)).is_none() {
        log::warn("atelier: showNotification called before the page was ready");
    }
}

/// Darken a hex color by `percent`.
#[must_use]
#[wasm_bindgen(js_name = "darkenColor")]
pub fn darken_color(color: &str, percent: f64) -> String {
    pigment::darken(color, percent)
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(version().contains('.'));
    }

    #[test]
    fn test_darken_color_matches_core() {
        assert_eq!(darken_color("#4361ee", 20.0), "#102ebb");
        assert_eq!(darken_color("#000000", 50.0), "#000000");
    }
}

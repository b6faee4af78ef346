//! Console output for the browser host.

use wasm_bindgen::JsValue;

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    tracing::warn!("{message}");
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Log a warning with the JavaScript value that caused it.
pub fn warn_js(message: &str, cause: &JsValue) {
    tracing::warn!(?cause, "{message}");
    web_sys::console::warn_2(&JsValue::from_str(message), cause);
}

//! Asynchronous clipboard writes.

use atelier::Error;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::dispatch::Dispatch;

/// Start writing `text` and report the outcome to the site when it settles.
pub fn write_text(text: String, dispatch: Dispatch) {
    spawn_local(async move {
        let outcome = write(&text).await;
        dispatch.with(|site| site.on_clipboard(outcome));
    });
}

async fn write(text: &str) -> atelier::Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::clipboard("no window"))?;
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard")).map_err(js_error)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(Error::clipboard("clipboard API unavailable"));
    }

    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

fn js_error(value: JsValue) -> Error {
    Error::clipboard(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

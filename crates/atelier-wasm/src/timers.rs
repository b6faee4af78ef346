//! `setTimeout`-backed scheduler.

use std::time::Duration;

use atelier::{Scheduler, Timer};
use js_sys::Date;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::dispatch::Dispatch;
use crate::log;

/// Delivers site timers through the window's `setTimeout`.
#[derive(Debug)]
pub struct BrowserScheduler {
    window: Window,
    origin: f64,
    dispatch: Dispatch,
}

impl BrowserScheduler {
    pub fn new(window: Window, dispatch: Dispatch) -> Self {
        Self {
            window,
            origin: Date::now(),
            dispatch,
        }
    }
}

impl Scheduler<Timer> for BrowserScheduler {
    fn now(&self) -> Duration {
        Duration::from_secs_f64((Date::now() - self.origin).max(0.0) / 1000.0)
    }

    fn schedule(&mut self, delay: Duration, message: Timer) {
        let dispatch = self.dispatch.clone();
        let callback = Closure::once_into_js(move || {
            dispatch.with(|site| site.on_timer(message));
        });
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            log::warn_js("atelier: setTimeout failed", &err);
        }
    }
}

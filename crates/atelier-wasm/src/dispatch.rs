//! Routing browser callbacks back into the site.

use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;

use atelier::Site;

use crate::dom::DomSurface;
use crate::log;
use crate::timers::BrowserScheduler;

/// The site as hosted in a browser.
pub type BrowserSite = Site<DomSurface, BrowserScheduler>;

/// A weak handle to the page's site.
///
/// Timer callbacks, clipboard results and event listeners hold one of these
/// so they never keep the site alive on their own.
#[derive(Clone, Default)]
pub struct Dispatch(Weak<RefCell<BrowserSite>>);

impl Dispatch {
    pub fn new(site: Weak<RefCell<BrowserSite>>) -> Self {
        Self(site)
    }

    /// A handle that reaches nothing. Callbacks through it are dropped.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Run `f` against the site.
    ///
    /// Returns `None` if the site is gone or already running a handler.
    pub fn with<R>(&self, f: impl FnOnce(&mut BrowserSite) -> R) -> Option<R> {
        let site = self.0.upgrade()?;
        let Ok(mut site) = site.try_borrow_mut() else {
            log::warn("atelier: callback dropped while another handler was running");
            return None;
        };
        Some(f(&mut site))
    }
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("attached", &(self.0.strong_count() > 0))
            .finish()
    }
}

#![forbid(unsafe_code)]
// Allow these clippy lints for handler-style UI code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]

//! # Atelier
//!
//! Interactive behavior for a static component-library documentation site,
//! independent of any browser.
//!
//! Atelier provides:
//! - **Theme preview**: the customization panel's paired color controls,
//!   live CSS variable preview, generated CSS snippet, reset and apply
//! - **Notifications**: auto-dismissing toasts with manual dismissal
//! - **Demos**: the examples page's notification buttons and login form
//!
//! The page talks to a document through the [`Surface`] trait and to time
//! through a [`Scheduler`]. A browser host implements both over the DOM;
//! tests use [`MemorySurface`] and [`VirtualScheduler`].
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use atelier::{ids, MemorySurface, Site, SiteConfig, Surface, VirtualScheduler};
//!
//! let mut site = Site::new(
//!     MemorySurface::customize_page(),
//!     VirtualScheduler::new(),
//!     SiteConfig::default(),
//! );
//! site.start();
//!
//! site.on_input("borderRadius", "12");
//! let css = site.surface().text(ids::CSS_OUTPUT).unwrap_or_default();
//! assert!(css.contains("--radius-md: 12px;"));
//!
//! let id = site.notify("Saved", atelier::NoticeKind::Success);
//! site.advance(Duration::from_millis(1000));
//! site.on_dismiss(id);
//! site.advance(Duration::from_millis(300));
//! assert!(site.notifications().is_empty());
//! ```

mod config;
mod controls;
mod customize;
pub mod demos;
mod error;
mod fields;
pub mod markup;
mod memory;
mod notify;
pub mod preview;
pub mod serialize;
mod site;
mod style;
mod surface;
pub mod sync;

pub use config::{SiteConfig, Timings};
pub use controls::{Button, Control, Trigger, ids};
pub use customize::{CustomizePanel, PanelSnapshot};
pub use demos::{Credentials, LoginVerdict};
pub use error::{Error, Result};
pub use fields::{CustomizationFieldState, DEFAULT_FONT_STACK, Field, ShadowLevel};
pub use memory::{COPY_BUTTON_LABEL, Element, MemorySurface, NotificationNode};
pub use notify::{NoticeKind, NoticeTimer, Notification, NotificationCenter, NotificationId, Phase};
pub use site::{CLIPBOARD_FAILED, Site, Timer};
pub use style::{StyleVar, StyleVariableSet};
pub use surface::Surface;
pub use tempo::{Scheduler, VirtualScheduler};

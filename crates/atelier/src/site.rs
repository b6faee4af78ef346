//! The page dispatcher.
//!
//! A host owns one [`Site`] per page load and forwards DOM events to its
//! named handlers. Every handler runs to completion; timers come back
//! through [`Site::on_timer`] and clipboard results through
//! [`Site::on_clipboard`].

use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;

use tempo::{Scheduler, VirtualScheduler};
use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::controls::{Button, Control, Trigger, ids};
use crate::customize::CustomizePanel;
use crate::demos::{self, Credentials, LoginVerdict};
use crate::error::Result;
use crate::markup;
use crate::notify::{NoticeKind, NoticeTimer, NotificationCenter, NotificationId};
use crate::surface::Surface;

/// Message shown when the clipboard write fails.
pub const CLIPBOARD_FAILED: &str = "Could not copy to clipboard";

/// Every timer the site schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    Notice(NoticeTimer),
    /// Put a copied element's content back. Only the timer of the latest
    /// copy into that element acts.
    RestoreCopyLabel { generation: u64 },
    /// The simulated sign-in has answered.
    LoginAnswered(LoginVerdict),
}

impl From<NoticeTimer> for Timer {
    fn from(timer: NoticeTimer) -> Self {
        Self::Notice(timer)
    }
}

/// A clipboard write whose outcome has not arrived yet.
#[derive(Debug, Clone)]
struct PendingCopy {
    element: String,
    feedback: &'static str,
}

#[derive(Debug, Clone)]
struct CopyFeedback {
    original: String,
    generation: u64,
}

/// Interactive behavior of one documentation page.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use atelier::{MemorySurface, Site, SiteConfig, VirtualScheduler};
///
/// let mut site = Site::new(MemorySurface::customize_page(), VirtualScheduler::new(), SiteConfig::default());
/// site.start();
///
/// site.on_input("primaryColorText", "#ff0000");
/// assert_eq!(site.surface().root_property("--primary-dark"), Some("#cc0000"));
///
/// site.on_click("resetCustomization");
/// assert_eq!(site.notifications().len(), 1);
///
/// site.advance(Duration::from_millis(5000));
/// assert!(site.notifications().is_empty());
/// ```
#[derive(Debug)]
pub struct Site<S, T> {
    surface: S,
    timers: T,
    config: SiteConfig,
    panel: Option<CustomizePanel>,
    notifications: NotificationCenter,
    pending_copies: VecDeque<PendingCopy>,
    copy_feedback: BTreeMap<String, CopyFeedback>,
    copy_generation: u64,
}

impl<S: Surface, T: Scheduler<Timer>> Site<S, T> {
    pub fn new(surface: S, timers: T, config: SiteConfig) -> Self {
        let notifications = NotificationCenter::new(&config.timings);
        Self {
            surface,
            timers,
            config,
            panel: None,
            notifications,
            pending_copies: VecDeque::new(),
            copy_feedback: BTreeMap::new(),
            copy_generation: 0,
        }
    }

    /// The document is ready: bind the customization panel if present and
    /// render the initial preview.
    pub fn start(&mut self) {
        self.panel = CustomizePanel::detect(&self.surface, &self.config);
        if let Some(panel) = self.panel.as_mut() {
            panel.refresh(&mut self.surface);
        }
        info!(customize = self.panel.is_some(), "site started");
    }

    /// An `input` event on the element with this id.
    pub fn on_input(&mut self, id: &str, value: &str) -> bool {
        self.on_control(Trigger::Input, id, value)
    }

    /// A `change` event on the element with this id.
    pub fn on_change(&mut self, id: &str, value: &str) -> bool {
        self.on_control(Trigger::Change, id, value)
    }

    fn on_control(&mut self, trigger: Trigger, id: &str, value: &str) -> bool {
        let (Some(panel), Some(control)) = (self.panel.as_mut(), Control::from_id(id)) else {
            return false;
        };
        panel.handle(&mut self.surface, trigger, control, value)
    }

    /// A click on the element with this id. Returns true if it was handled.
    pub fn on_click(&mut self, id: &str) -> bool {
        let Some(button) = Button::from_id(id) else {
            return false;
        };

        match button {
            Button::Apply => {
                let Some(panel) = self.panel.as_ref() else {
                    return false;
                };
                let snapshot = panel.apply();
                debug!(vars = snapshot.vars.len(), "customization captured");
                self.notify("Customization saved!", NoticeKind::Success);
                self.notify("Customization applied!", NoticeKind::Success);
            }
            Button::Reset => {
                let Some(panel) = self.panel.as_mut() else {
                    return false;
                };
                panel.reset(&mut self.surface);
                self.notify("Customization reset to default", NoticeKind::Info);
            }
            Button::CopyCss => {
                if self.panel.is_none() {
                    return false;
                }
                let Some(css) = self.surface.text(ids::CSS_OUTPUT) else {
                    return false;
                };
                self.start_copy(Button::CopyCss.id(), &css, markup::COPIED_LABEL);
            }
            Button::ShowDemo(kind) => {
                self.notify(demos::demo_message(kind), kind);
            }
        }
        true
    }

    /// A click on the code block with this id copies its code. Ignored
    /// while the block is showing copy feedback.
    pub fn on_code_block_click(&mut self, id: &str) -> bool {
        if self.copy_feedback.contains_key(id) {
            debug!(block = id, "code block is showing copy feedback");
            return false;
        }
        let Some(code) = self.surface.code_text(id) else {
            return false;
        };
        self.start_copy(id, &code, markup::CODE_COPIED);
        true
    }

    fn start_copy(&mut self, element: &str, text: &str, feedback: &'static str) {
        self.pending_copies.push_back(PendingCopy {
            element: element.to_string(),
            feedback,
        });
        self.surface.write_clipboard(text);
    }

    /// The host finished the oldest clipboard write still in flight.
    pub fn on_clipboard(&mut self, outcome: Result<()>) {
        let Some(pending) = self.pending_copies.pop_front() else {
            debug!("clipboard outcome without a pending copy");
            return;
        };

        if let Err(err) = outcome {
            warn!(error = %err, element = %pending.element, "clipboard write failed");
            self.notify(CLIPBOARD_FAILED, NoticeKind::Error);
            return;
        }

        let Some(current) = self.surface.markup(&pending.element) else {
            return;
        };

        self.copy_generation += 1;
        let generation = self.copy_generation;
        let original = self
            .copy_feedback
            .remove(&pending.element)
            .map_or(current, |feedback| feedback.original);
        self.surface.set_markup(&pending.element, pending.feedback);
        self.copy_feedback
            .insert(pending.element, CopyFeedback { original, generation });

        self.timers.schedule(
            self.config.timings.copy_feedback(),
            Timer::RestoreCopyLabel { generation },
        );
    }

    /// A click on a notification's dismiss button.
    pub fn on_dismiss(&mut self, id: NotificationId) -> bool {
        self.notifications
            .dismiss(&mut self.surface, &mut self.timers, id)
    }

    /// A form submission. Returns true if the default action should be
    /// prevented.
    pub fn on_submit(&mut self, form: &str) -> bool {
        if form != ids::LOGIN_FORM || !self.surface.has_element(ids::LOGIN_RESULT) {
            return false;
        }

        let credentials = Credentials::read(&self.surface);
        if let Err(err) = credentials.validate() {
            self.notify(err.user_message(), NoticeKind::Error);
            return true;
        }

        self.surface
            .set_markup(ids::LOGIN_RESULT, &demos::pending_markup());
        self.timers.schedule(
            self.config.timings.login_delay(),
            Timer::LoginAnswered(credentials.verdict()),
        );
        true
    }

    /// A key press anywhere on the page. Escape dismisses the oldest
    /// notification.
    pub fn on_key_down(&mut self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        self.notifications
            .dismiss_oldest(&mut self.surface, &mut self.timers)
            .is_some()
    }

    /// A timer scheduled by this site has fired.
    pub fn on_timer(&mut self, timer: Timer) {
        match timer {
            Timer::Notice(timer) => {
                self.notifications
                    .on_timer(&mut self.surface, &mut self.timers, timer);
            }
            Timer::RestoreCopyLabel { generation } => {
                let element = self
                    .copy_feedback
                    .iter()
                    .find(|(_, feedback)| feedback.generation == generation)
                    .map(|(element, _)| element.clone());
                let Some((element, feedback)) =
                    element.and_then(|e| self.copy_feedback.remove_entry(&e))
                else {
                    debug!(generation, "stale copy label timer");
                    return;
                };
                self.surface.set_markup(&element, &feedback.original);
            }
            Timer::LoginAnswered(verdict) => {
                self.surface.set_markup(ids::LOGIN_RESULT, &verdict.markup());
            }
        }
    }

    /// Show a notification.
    pub fn notify(&mut self, message: impl Into<String>, kind: NoticeKind) -> NotificationId {
        self.notifications
            .emit(&mut self.surface, &mut self.timers, message, kind)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The customization panel, if this page has one.
    pub fn panel(&self) -> Option<&CustomizePanel> {
        self.panel.as_ref()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }
}

impl<S: Surface> Site<S, VirtualScheduler<Timer>> {
    /// Move virtual time forward by `by`, firing every timer that falls due
    /// on the way, including timers scheduled by fired timers.
    ///
    /// Returns how many timers fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let deadline = self.timers.now() + by;
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(deadline) {
            self.on_timer(timer);
            fired += 1;
        }
        self.timers.advance_to(deadline);
        fired
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }
}

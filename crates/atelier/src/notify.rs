//! Toast notifications.
//!
//! [`NotificationCenter`] owns the live notifications and drives their
//! lifecycle through a [`Scheduler`]:
//!
//! ```text
//! emit ──► Visible ──(dismiss | lifetime - exit)──► Exiting ──(exit)──► removed
//! ```
//!
//! A notification is removed exactly when its display window ends, with the
//! exit animation running during the window's final stretch. Dismissing
//! starts the exit early. Timers are never cancelled; a timer whose
//! notification has already moved on is a no-op.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tempo::Scheduler;
use tracing::debug;

use crate::config::Timings;
use crate::controls::ids;
use crate::markup;
use crate::surface::Surface;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
    #[default]
    Info,
}

impl NoticeKind {
    /// Parse a kind name. Names match exactly; anything else, including
    /// other casings and padded names, is [`NoticeKind::Info`].
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon name, without the `fa-` prefix.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Warning => "exclamation-triangle",
            Self::Error => "times-circle",
            Self::Info => "info-circle",
        }
    }
}

impl From<&str> for NoticeKind {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies a notification for its whole lifetime. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NotificationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Exiting,
}

/// A live notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NoticeKind,
    /// Scheduler time at which it was emitted.
    pub created_at: Duration,
    pub phase: Phase,
}

/// Timer messages the notification center schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTimer {
    /// The display window is about to end; start the exit animation.
    BeginExit(NotificationId),
    /// The exit animation is over; remove the node.
    Remove(NotificationId),
}

/// Emits notifications and retires them.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    live: Vec<Notification>,
    next_id: u64,
    lifetime: Duration,
    exit: Duration,
}

impl NotificationCenter {
    pub fn new(timings: &Timings) -> Self {
        Self {
            live: Vec::new(),
            next_id: 1,
            lifetime: timings.notification_lifetime(),
            exit: timings.notification_exit(),
        }
    }

    /// Show `message`. The container is created on first use.
    ///
    /// There is no limit on how many notifications stack up.
    pub fn emit<S, T, M>(
        &mut self,
        surface: &mut S,
        timers: &mut T,
        message: impl Into<String>,
        kind: NoticeKind,
    ) -> NotificationId
    where
        S: Surface + ?Sized,
        T: Scheduler<M> + ?Sized,
        M: From<NoticeTimer>,
    {
        if !surface.has_element(ids::NOTIFICATION_CONTAINER) {
            surface.create_notification_container();
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification {
            id,
            message: message.into(),
            kind,
            created_at: timers.now(),
            phase: Phase::Visible,
        };

        let class = format!("alert {}", markup::alert_class(kind));
        surface.append_notification(id, &class, &markup::notification(&notification));
        timers.schedule(
            self.lifetime.saturating_sub(self.exit),
            NoticeTimer::BeginExit(id).into(),
        );

        debug!(id = id.get(), kind = kind.name(), "notification emitted");
        self.live.push(notification);
        id
    }

    /// Start the exit animation now; the node goes away after the exit delay.
    ///
    /// Returns false if the notification is gone or already leaving.
    pub fn dismiss<S, T, M>(&mut self, surface: &mut S, timers: &mut T, id: NotificationId) -> bool
    where
        S: Surface + ?Sized,
        T: Scheduler<M> + ?Sized,
        M: From<NoticeTimer>,
    {
        let Some(notification) = self
            .live
            .iter_mut()
            .find(|n| n.id == id && n.phase == Phase::Visible)
        else {
            debug!(id = id.get(), "dismiss ignored; notification not visible");
            return false;
        };

        notification.phase = Phase::Exiting;
        surface.mark_notification_exiting(id);
        timers.schedule(self.exit, NoticeTimer::Remove(id).into());
        true
    }

    /// Dismiss the oldest visible notification, if any.
    pub fn dismiss_oldest<S, T, M>(&mut self, surface: &mut S, timers: &mut T) -> Option<NotificationId>
    where
        S: Surface + ?Sized,
        T: Scheduler<M> + ?Sized,
        M: From<NoticeTimer>,
    {
        let id = self.live.iter().find(|n| n.phase == Phase::Visible)?.id;
        self.dismiss(surface, timers, id).then_some(id)
    }

    /// Handle one of this center's timers.
    pub fn on_timer<S, T, M>(&mut self, surface: &mut S, timers: &mut T, timer: NoticeTimer)
    where
        S: Surface + ?Sized,
        T: Scheduler<M> + ?Sized,
        M: From<NoticeTimer>,
    {
        match timer {
            NoticeTimer::BeginExit(id) => {
                self.dismiss(surface, timers, id);
            }
            NoticeTimer::Remove(id) => {
                self.remove(surface, id);
            }
        }
    }

    /// Remove a notification immediately. Removing twice is a no-op.
    pub fn remove<S: Surface + ?Sized>(&mut self, surface: &mut S, id: NotificationId) -> bool {
        let Some(index) = self.live.iter().position(|n| n.id == id) else {
            debug!(id = id.get(), "notification already removed");
            return false;
        };
        self.live.remove(index);
        surface.remove_notification(id);
        debug!(id = id.get(), "notification removed");
        true
    }

    /// Live notifications, oldest first.
    pub fn live(&self) -> &[Notification] {
        &self.live
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.live.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

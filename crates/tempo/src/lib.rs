#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]

//! # Tempo
//!
//! Fixed-delay timers for run-to-completion UI code.
//!
//! A timer does not carry a callback. It carries a message, and whoever owns
//! the scheduler hands fired messages back to the state machine that asked
//! for them. This keeps handlers free of shared mutable captures and lets
//! tests replace wall-clock waits with a virtual clock.
//!
//! - [`Scheduler`] - what UI code schedules against
//! - [`VirtualScheduler`] - deterministic, instant-time implementation
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use tempo::{Scheduler, VirtualScheduler};
//!
//! let mut timers = VirtualScheduler::new();
//! timers.schedule(Duration::from_millis(300), "exit");
//! timers.schedule(Duration::from_millis(100), "blink");
//!
//! let deadline = Duration::from_millis(500);
//! assert_eq!(timers.pop_due(deadline), Some("blink"));
//! assert_eq!(timers.now(), Duration::from_millis(100));
//! assert_eq!(timers.pop_due(deadline), Some("exit"));
//! assert_eq!(timers.pop_due(deadline), None);
//! ```

mod virtual_clock;

use std::time::Duration;

pub use virtual_clock::VirtualScheduler;

/// Schedules messages for delivery after a fixed delay.
///
/// There is no cancel operation. Receivers must treat a message that
/// arrives after its subject is gone as a no-op.
pub trait Scheduler<M> {
    /// Time elapsed since the scheduler was created.
    fn now(&self) -> Duration;

    /// Deliver `message` once `delay` has elapsed.
    fn schedule(&mut self, delay: Duration, message: M);
}

impl<M, S: Scheduler<M> + ?Sized> Scheduler<M> for &mut S {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn schedule(&mut self, delay: Duration, message: M) {
        (**self).schedule(delay, message);
    }
}

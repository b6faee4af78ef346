//! Virtual-time scheduler for tests and headless runs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::time::Duration;

use tracing::trace;

use crate::Scheduler;

struct Entry<M> {
    due: Duration,
    seq: u64,
    message: M,
}

impl<M> PartialEq for Entry<M> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<M> Eq for Entry<M> {}

impl<M> PartialOrd for Entry<M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap pops the earliest due entry, ties in insertion order.
impl<M> Ord for Entry<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A scheduler whose clock only moves when told to.
///
/// Messages fire in due-time order; messages due at the same instant fire in
/// the order they were scheduled. Firing a message moves the clock to its due
/// time, so a receiver that schedules follow-up timers while handling it gets
/// correct due times.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tempo::{Scheduler, VirtualScheduler};
///
/// let mut timers = VirtualScheduler::new();
/// timers.schedule(Duration::from_millis(5000), 1);
///
/// assert_eq!(timers.pop_due(Duration::from_millis(4999)), None);
/// timers.advance_to(Duration::from_millis(4999));
/// assert_eq!(timers.pop_due(Duration::from_millis(5000)), Some(1));
/// ```
pub struct VirtualScheduler<M> {
    now: Duration,
    next_seq: u64,
    fired: u64,
    queue: BinaryHeap<Entry<M>>,
}

impl<M> VirtualScheduler<M> {
    /// Create a scheduler at time zero with nothing pending.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            fired: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Number of messages waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// True if nothing is waiting to fire.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of messages fired so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Due time of the next message, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|entry| entry.due)
    }

    /// Fire the next message due at or before `deadline`.
    ///
    /// The clock moves to the fired message's due time. Returns `None` once
    /// nothing else is due; the clock is left where it was.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<M> {
        if self.next_due()? > deadline {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        self.fired += 1;
        trace!(due = ?entry.due, seq = entry.seq, "virtual timer fired");
        Some(entry.message)
    }

    /// Move the clock forward to `deadline` without firing anything.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    /// Fire everything due within `by` of now and settle the clock there.
    ///
    /// Messages scheduled by the caller while it handles the returned batch
    /// are not included; drive [`Self::pop_due`] in a loop when handlers
    /// schedule follow-ups.
    pub fn advance(&mut self, by: Duration) -> Vec<M> {
        let deadline = self.now + by;
        let mut fired = Vec::new();
        while let Some(message) = self.pop_due(deadline) {
            fired.push(message);
        }
        self.advance_to(deadline);
        fired
    }
}

impl<M> Default for VirtualScheduler<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for VirtualScheduler<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualScheduler")
            .field("now", &self.now)
            .field("pending", &self.queue.len())
            .field("fired", &self.fired)
            .finish()
    }
}

impl<M> Scheduler<M> for VirtualScheduler<M> {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, message: M) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            due: self.now + delay,
            seq,
            message,
        });
    }
}

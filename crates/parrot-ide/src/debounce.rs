//! Deadline-based debouncing for autosave and symbol hover.
//!
//! The caller supplies the clock, so a [`Debouncer`] can be driven from any
//! event loop or from tests.

use std::time::{Duration, Instant};

/// Runs a callback once the input has been quiet for `delay`.
pub struct Debouncer<F: FnMut()> {
    delay: Duration,
    deadline: Option<Instant>,
    callback: F,
}

impl<F: FnMut()> Debouncer<F> {
    /// Creates a disarmed debouncer.
    #[must_use]
    pub fn new(delay: Duration, callback: F) -> Self {
        Self {
            delay,
            deadline: None,
            callback,
        }
    }

    /// Records activity at `now`, pushing the deadline back.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Fires the callback if the deadline has passed. Returns whether it fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                (self.callback)();
                true
            }
            _ => false,
        }
    }

    /// Drops a pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

impl<F: FnMut()> std::fmt::Debug for Debouncer<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

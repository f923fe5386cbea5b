//! Single-slot debounce timer.
//!
//! Each new signal replaces the pending deadline, so only the last
//! signal within a quiet window survives to be polled. At most one
//! callback slot exists per instance; stale evaluations never fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
    pending_width: Option<u32>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            pending_width: None,
        }
    }

    /// Record a resize signal: cancel any pending deadline and start a
    /// new quiet period from `now`.
    pub fn signal(&mut self, width: u32, now: Instant) {
        self.pending_width = Some(width);
        self.deadline = Some(now + self.delay);
    }

    /// Poll the timer. Returns the width of the last recorded signal
    /// once the quiet period has elapsed, clearing the slot; `None`
    /// while still waiting or when idle.
    pub fn poll(&mut self, now: Instant) -> Option<u32> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.pending_width.take()
    }

    /// Drop any pending signal.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.pending_width = None;
    }

    /// Whether a signal is waiting out its quiet period.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

//! Keystroke debouncer
//!
//! Holds a single pending deadline: every keystroke restarts it, and the
//! trigger fires once the input has been idle for the configured delay.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    /// Time of the most recent keystroke, if a trigger is pending
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending_since: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending trigger and restart the idle timer from now
    pub fn schedule_execution(&mut self) {
        self.schedule_execution_at(Instant::now());
    }

    pub fn schedule_execution_at(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    pub fn should_execute(&self) -> bool {
        self.should_execute_at(Instant::now())
    }

    /// True once the input has been idle for at least the delay
    pub fn should_execute_at(&self, now: Instant) -> bool {
        self.pending_since
            .is_some_and(|since| now.saturating_duration_since(since) >= self.delay)
    }

    /// Consume the pending trigger
    pub fn mark_executed(&mut self) {
        self.pending_since = None;
    }

    pub fn cancel(&mut self) {
        self.pending_since = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Remaining idle time before the pending trigger fires
    ///
    /// Returns `None` when nothing is pending and `Duration::ZERO` when the
    /// trigger is already due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending_since.map(|since| {
            let elapsed = now.saturating_duration_since(since);
            self.delay.saturating_sub(elapsed)
        })
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;

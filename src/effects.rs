//! Short-lived visual effects
//!
//! A [`Transient`] is a deadline. Arming it again replaces the deadline, so
//! the most recent trigger always decides when the effect ends.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transient {
    until: Option<Instant>,
}

impl Transient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the effect at `now` for `duration`
    pub fn arm(&mut self, now: Instant, duration: Duration) {
        self.until = Some(now + duration);
    }

    pub fn cancel(&mut self) {
        self.until = None;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Returns true exactly once, on the first call at or after the deadline.
    ///
    /// Used for effects that run a follow-up action when they end.
    pub fn take_expired(&mut self, now: Instant) -> bool {
        match self.until {
            Some(until) if now >= until => {
                self.until = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the effect ends
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.until
            .and_then(|until| until.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }
}

//! Throttle/debounce policy for redraw triggers
//!
//! Owned by the caller (the UI layer), never by the engine. Time is passed
//! in explicitly so the policy can be driven from any event loop and tested
//! without sleeping.

use crate::constants::interaction::{SETTINGS_DEBOUNCE, ZOOM_THROTTLE};
use std::time::{Duration, Instant};

/// When a burst of calls is allowed through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitMode {
    /// Fire on the first call, drop the rest of the interval (throttle)
    Leading,
    /// Fire once the calls stop for a full interval (debounce)
    Trailing,
}

/// Caller-owned rate limiting policy
#[derive(Debug, Clone)]
pub struct RateLimiter {
    interval: Duration,
    mode: RateLimitMode,
    last_fired: Option<Instant>,
    deadline: Option<Instant>,
}

impl RateLimiter {
    pub fn new(interval: Duration, mode: RateLimitMode) -> Self {
        Self {
            interval,
            mode,
            last_fired: None,
            deadline: None,
        }
    }

    pub fn throttle(interval: Duration) -> Self {
        Self::new(interval, RateLimitMode::Leading)
    }

    pub fn debounce(interval: Duration) -> Self {
        Self::new(interval, RateLimitMode::Trailing)
    }

    /// Throttle for redraws driven by continuous zoom/pan
    pub fn for_zoom() -> Self {
        Self::throttle(ZOOM_THROTTLE)
    }

    /// Debounce for redraws driven by settings edits
    pub fn for_settings() -> Self {
        Self::debounce(SETTINGS_DEBOUNCE)
    }

    pub fn mode(&self) -> RateLimitMode {
        self.mode
    }

    /// Register a call at `now`; true if it should run right away.
    ///
    /// In trailing mode this never fires directly: it cancels any pending
    /// deadline and schedules a new one, to be picked up by [`Self::poll`].
    pub fn call(&mut self, now: Instant) -> bool {
        match self.mode {
            RateLimitMode::Leading => {
                let ready = self
                    .last_fired
                    .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
                if ready {
                    self.last_fired = Some(now);
                }
                ready
            }
            RateLimitMode::Trailing => {
                self.deadline = Some(now + self.interval);
                false
            }
        }
    }

    /// True once when a scheduled trailing call is due
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.last_fired = Some(now);
                true
            }
            _ => false,
        }
    }

    /// How long until the pending trailing call is due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop any scheduled call
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Forget history so the next call is treated as the first
    pub fn reset(&mut self) {
        self.last_fired = None;
        self.deadline = None;
    }
}

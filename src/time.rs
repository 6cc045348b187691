//! One-shot deadlines and the fade ramp.
//!
//! The run owns two independent deadlines (fade start, hard stop) and
//! polls them from the frame path. Ownership is the cancellation story:
//! dropping the run releases both on every exit path, so a torn-down run
//! can never leave a timer behind for the next one to observe.

use std::time::{Duration, Instant};

/// A one-shot deadline polled from the frame loop.
#[derive(Debug, Clone)]
pub struct Deadline {
    due_at: Instant,
    fired: bool,
}

impl Deadline {
    /// Arm a deadline `delay` from `now`.
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self {
            due_at: now + delay,
            fired: false,
        }
    }

    /// When the deadline comes due.
    #[inline]
    pub fn due_at(&self) -> Instant {
        self.due_at
    }

    /// Whether the deadline has already fired.
    #[inline]
    pub fn fired(&self) -> bool {
        self.fired
    }

    /// True exactly once, on the first poll at or past the due time.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.fired || now < self.due_at {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Linear opacity ramp from 1.0 down to 0.0 over a fixed window.
#[derive(Debug, Clone, Copy)]
pub struct FadeRamp {
    started_at: Instant,
    window: Duration,
}

impl FadeRamp {
    /// Start a ramp at `started_at` lasting `window`.
    pub fn new(started_at: Instant, window: Duration) -> Self {
        Self { started_at, window }
    }

    /// Opacity at `now`: 1.0 at the start, 0.0 once the window has elapsed.
    pub fn opacity(&self, now: Instant) -> f32 {
        if self.window.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (1.0 - elapsed.as_secs_f32() / self.window.as_secs_f32()).clamp(0.0, 1.0)
    }
}

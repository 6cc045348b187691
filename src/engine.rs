//! Run lifecycle: activation, per-frame advance, fade, hard stop.
//!
//! The engine owns at most one live [`Run`]: the particle set, the frame
//! counter, and the two one-shot deadlines that end it. Activating while
//! a run is live is an explicit restart: the old run is dropped
//! wholesale (particles, deadlines, counter) and a fresh one is seeded
//! for the current viewport. Nothing survives across runs.
//!
//! The engine is headless: it knows nothing about windows or GPUs and is
//! driven entirely through [`Engine::frame`], which makes the whole
//! lifecycle unit-testable with synthetic instants.
//!
//! # Example
//!
//! ```no_run
//! use std::time::{Duration, Instant};
//! use confetti::{Engine, Frame};
//! use glam::Vec2;
//!
//! let mut engine = Engine::new();
//! let viewport = Vec2::new(1280.0, 720.0);
//! engine.activate(Instant::now(), Duration::from_secs(15), viewport);
//!
//! loop {
//!     match engine.frame(Instant::now(), viewport) {
//!         Frame::Drawn { particles, opacity } => { /* draw strips */ }
//!         Frame::Cleared => break, // hard stop fired: final clear, done
//!         Frame::Idle => break,
//!     }
//! }
//! ```

use std::time::{Duration, Instant};

use glam::Vec2;

use crate::particle::Particle;
use crate::physics;
use crate::spawn::SpawnContext;
use crate::time::{Deadline, FadeRamp};

/// Opacity fade window at the tail of a run.
pub const FADE: Duration = Duration::from_millis(600);
/// Hard-stop slack past the configured duration: the fade window plus a
/// small buffer so the last faded frame is never cut off.
pub const STOP_SLACK: Duration = Duration::from_millis(650);

/// What one frame produced, for the render layer.
#[derive(Debug, PartialEq)]
pub enum Frame<'a> {
    /// No run is live; there is nothing to draw.
    Idle,
    /// The run just ended. Clear the surface one last time and stop
    /// re-arming redraws; reported exactly once per run.
    Cleared,
    /// A run is live: draw these strips at this opacity.
    Drawn {
        /// The live strips, updated for this frame.
        particles: &'a [Particle],
        /// 1.0 until the fade deadline fires, then linear to 0.0.
        opacity: f32,
    },
}

/// One activation-to-teardown lifecycle.
struct Run {
    particles: Vec<Particle>,
    /// Frame counter; drives the wind oscillation.
    t: u32,
    fade_due: Deadline,
    stop_due: Deadline,
    fade: Option<FadeRamp>,
}

/// The confetti engine.
///
/// Owns the spawn RNG and at most one live run. See the module docs for
/// the lifecycle contract.
pub struct Engine {
    ctx: SpawnContext,
    run: Option<Run>,
}

impl Engine {
    /// Engine with an entropy-seeded spawn stream.
    pub fn new() -> Self {
        Self {
            ctx: SpawnContext::new(),
            run: None,
        }
    }

    /// Engine with a pinned spawn stream, for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            ctx: SpawnContext::seeded(seed),
            run: None,
        }
    }

    /// Whether a run is live.
    ///
    /// Flips false on deactivation or when the hard stop fires, which is
    /// how callers observe run completion.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    /// Frames advanced since activation.
    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.run.as_ref().map_or(0, |run| run.t)
    }

    /// The live run's strips, or an empty slice.
    pub fn particles(&self) -> &[Particle] {
        self.run.as_ref().map_or(&[], |run| run.particles.as_slice())
    }

    /// Start a run, replacing any live one wholesale.
    ///
    /// Seeds `round(w * h / 1200)` strips for the logical viewport and
    /// arms the fade deadline at `max(0, duration - 600ms)` and the hard
    /// stop at `duration + 650ms`.
    pub fn activate(&mut self, now: Instant, duration: Duration, extent: Vec2) {
        self.run = Some(Run {
            particles: self.ctx.burst(extent),
            t: 0,
            fade_due: Deadline::after(now, duration.saturating_sub(FADE)),
            stop_due: Deadline::after(now, duration + STOP_SLACK),
            fade: None,
        });
    }

    /// Tear down the live run, if any.
    ///
    /// Particles and both deadlines are released in this one call; the
    /// next [`frame`](Self::frame) reports [`Frame::Idle`].
    pub fn deactivate(&mut self) {
        self.run = None;
    }

    /// Advance one display frame.
    ///
    /// `extent` is the live logical viewport, re-read every frame so
    /// resizes take effect through the wrap and ground checks without
    /// resetting particle state.
    pub fn frame(&mut self, now: Instant, extent: Vec2) -> Frame<'_> {
        let stopped = self
            .run
            .as_mut()
            .is_some_and(|run| run.stop_due.poll(now));
        if stopped {
            self.run = None;
            return Frame::Cleared;
        }

        let Some(run) = self.run.as_mut() else {
            return Frame::Idle;
        };

        run.t += 1;
        physics::step(&mut run.particles, run.t, extent);

        if run.fade_due.poll(now) {
            run.fade = Some(FadeRamp::new(now, FADE));
        }
        let opacity = run.fade.map_or(1.0, |fade| fade.opacity(now));

        Frame::Drawn {
            particles: &run.particles,
            opacity,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

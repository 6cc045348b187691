//! # confetti - Confetti burst overlays made easy
//!
//! A confetti burst: strips spawn across the whole viewport, fall in
//! under gravity and a zigzag wind, bounce, settle on the ground, fade
//! out, and clean up after themselves.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use confetti::Confetti;
//!
//! fn main() -> Result<(), confetti::OverlayError> {
//!     Confetti::new()
//!         .with_duration(Duration::from_secs(15))
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Runs
//!
//! One activation-to-teardown lifecycle is a *run*: a freshly seeded
//! strip set (one strip per 1200 square logical pixels of viewport), a
//! frame counter, and two one-shot deadlines. The fade deadline starts a
//! 600ms opacity ramp at `duration - 600ms`; the hard stop ends the run
//! at `duration + 650ms`, clearing the surface and releasing everything.
//! At most one run is alive at a time; activating again mid-run restarts
//! wholesale.
//!
//! ### The headless engine
//!
//! [`Engine`] owns the run and knows nothing about windows. Drive it
//! yourself if you already have a frame loop:
//!
//! ```no_run
//! use std::time::{Duration, Instant};
//! use confetti::{Engine, Frame, Vec2};
//!
//! let mut engine = Engine::new();
//! let viewport = Vec2::new(1280.0, 720.0);
//! engine.activate(Instant::now(), Duration::from_secs(10), viewport);
//!
//! // once per display frame:
//! match engine.frame(Instant::now(), viewport) {
//!     Frame::Drawn { particles, opacity } => { /* draw the strips */ }
//!     Frame::Cleared => { /* run over: clear once, stop scheduling */ }
//!     Frame::Idle => {}
//! }
//! ```
//!
//! ### The overlay
//!
//! [`Confetti`] wraps the engine in a winit window with a wgpu instanced
//! strip renderer. Strips keep logical-pixel coordinates forever; device
//! pixel ratio and resizes only ever touch the surface's backing
//! resolution.

pub mod engine;
pub mod error;
mod overlay;
pub mod particle;
pub mod physics;
pub mod render;
pub mod spawn;
pub mod time;
pub mod visuals;

pub use engine::{Engine, Frame, FADE, STOP_SLACK};
pub use error::{GpuError, OverlayError};
pub use glam::Vec2;
pub use overlay::Confetti;
pub use particle::{Instance, Particle};
pub use spawn::SpawnContext;
pub use visuals::Palette;

/// Convenient re-exports for common usage.
///
/// ```no_run
/// use confetti::prelude::*;
/// ```
pub mod prelude {
    pub use crate::engine::{Engine, Frame};
    pub use crate::overlay::Confetti;
    pub use crate::particle::Particle;
    pub use crate::spawn::SpawnContext;
    pub use crate::visuals::Palette;
    pub use crate::Vec2;
}

//! Per-frame strip dynamics.
//!
//! One call to [`step`] advances every strip by a single display frame:
//! sinusoidal wind, gravity with a mild velocity-dependent drag term,
//! spin, horizontal wrap-around past the viewport edges, and a ground
//! bounce that bleeds energy until the strip settles. Settled strips only
//! slide horizontally until they stop.
//!
//! The integration is per-frame, not per-second: velocities are logical
//! pixels per frame and the tuning below assumes a display-refresh-driven
//! loop.

use glam::Vec2;

use crate::particle::Particle;

/// Downward acceleration per frame.
pub const GRAVITY: f32 = 0.18;
/// Velocity-dependent drag factor folded into the gravity term.
pub const DRAG: f32 = 0.0025;
/// Lateral wind amplitude.
pub const WIND_AMP: f32 = 0.9;
/// Wind oscillation frequency in radians per frame.
pub const WIND_FREQ: f32 = 0.07;
/// Fraction of the wind force fed into horizontal velocity each frame.
pub const WIND_KICK: f32 = 0.03;
/// Vertical restitution on ground contact.
pub const GROUND_BOUNCE: f32 = 0.22;
/// Horizontal friction applied on every ground contact.
pub const GROUND_FRICTION: f32 = 0.90;
/// Bounce speed below which a strip settles.
pub const SETTLE_SPEED: f32 = 0.25;
/// Extra horizontal damping applied at the moment of settling.
pub const SETTLE_FRICTION: f32 = 0.85;
/// Per-frame horizontal decay of settled strips sliding to rest.
pub const SLIDE_DECAY: f32 = 0.92;
/// Slide speed below which a settled strip stops entirely.
pub const SLIDE_STOP: f32 = 0.02;
/// Horizontal margin past which strips wrap to the opposite edge.
pub const EDGE_MARGIN: f32 = 20.0;
/// Ground plane offset above the bottom of the viewport.
pub const GROUND_CLEARANCE: f32 = 2.0;

/// Advance every strip by one frame.
///
/// `t` is the run's frame counter and drives the shared wind oscillation.
/// `extent` is the live logical viewport size, re-read every frame so the
/// wrap and ground checks track resizes without resetting any strip.
pub fn step(particles: &mut [Particle], t: u32, extent: Vec2) {
    let tf = t as f32;
    let ground = extent.y - GROUND_CLEARANCE;

    for p in particles.iter_mut() {
        if !p.settled {
            let wind = (p.phase + tf * WIND_FREQ).sin() * WIND_AMP;

            p.vel.x += wind * WIND_KICK;
            p.vel.y += GRAVITY * (1.0 - DRAG * p.vel.y);

            p.pos += p.vel;
            p.angle += p.spin;

            if p.pos.x < -EDGE_MARGIN {
                p.pos.x = extent.x + EDGE_MARGIN;
            }
            if p.pos.x > extent.x + EDGE_MARGIN {
                p.pos.x = -EDGE_MARGIN;
            }

            if p.pos.y >= ground {
                p.pos.y = ground;
                p.vel.y = -p.vel.y.abs() * GROUND_BOUNCE;
                p.vel.x *= GROUND_FRICTION;

                if p.vel.y.abs() < SETTLE_SPEED {
                    p.vel.y = 0.0;
                    p.vel.x *= SETTLE_FRICTION;
                    p.settled = true;
                }
            }
        } else {
            p.vel.x *= SLIDE_DECAY;
            p.pos.x += p.vel.x;
            if p.vel.x.abs() < SLIDE_STOP {
                p.vel.x = 0.0;
            }
        }

        p.life += 1;
    }
}

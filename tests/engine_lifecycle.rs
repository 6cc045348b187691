//! Integration tests for the run lifecycle.
//!
//! These drive the headless engine through whole runs with synthetic
//! instants: spawn density, fade and hard-stop timing, cut-short and
//! restart behavior, and the edge dynamics of individual strips.

use std::time::{Duration, Instant};

use confetti::{physics, Engine, Frame, Particle, Vec2};

const VIEWPORT: Vec2 = Vec2::new(1200.0, 800.0);
const MS: Duration = Duration::from_millis(1);

// ============================================================================
// Full-run timing
// ============================================================================

#[test]
fn test_full_run_spawns_fades_and_stops_on_schedule() {
    let base = Instant::now();
    let mut engine = Engine::seeded(11);
    engine.activate(base, Duration::from_millis(15_000), VIEWPORT);

    // 1200 * 800 / 1200 = 800 strips, seeded in the band above the fold.
    assert_eq!(engine.particles().len(), 800);
    assert!(engine.particles().iter().all(|p| p.pos.y <= 0.0));
    assert!(engine
        .particles()
        .iter()
        .all(|p| p.pos.x >= 0.0 && p.pos.x < VIEWPORT.x));

    // Fully opaque right up to the fade deadline at 14.4s.
    for probe in [1u32, 5_000, 14_399] {
        match engine.frame(base + probe * MS, VIEWPORT) {
            Frame::Drawn { opacity, .. } => assert_eq!(opacity, 1.0, "at {}ms", probe),
            other => panic!("expected Drawn at {}ms, got {:?}", probe, other),
        }
    }

    // The fade deadline fires at 14.4s and ramps linearly over 600ms.
    match engine.frame(base + 14_400 * MS, VIEWPORT) {
        Frame::Drawn { opacity, .. } => assert_eq!(opacity, 1.0),
        other => panic!("expected Drawn, got {:?}", other),
    }
    match engine.frame(base + 14_700 * MS, VIEWPORT) {
        Frame::Drawn { opacity, .. } => assert!((opacity - 0.5).abs() < 1e-3),
        other => panic!("expected Drawn, got {:?}", other),
    }
    match engine.frame(base + 15_000 * MS, VIEWPORT) {
        Frame::Drawn { opacity, .. } => assert_eq!(opacity, 0.0),
        other => panic!("expected Drawn, got {:?}", other),
    }

    // Hard stop at 15.65s: one Cleared report, then idle, inactive, empty.
    assert!(matches!(
        engine.frame(base + 15_649 * MS, VIEWPORT),
        Frame::Drawn { .. }
    ));
    assert_eq!(engine.frame(base + 15_650 * MS, VIEWPORT), Frame::Cleared);
    assert!(!engine.is_active());
    assert!(engine.particles().is_empty());
    assert_eq!(engine.frame(base + 15_651 * MS, VIEWPORT), Frame::Idle);
}

// ============================================================================
// Cut-short and restart
// ============================================================================

#[test]
fn test_cut_short_then_reactivate_carries_nothing_over() {
    let base = Instant::now();
    let mut engine = Engine::seeded(5);
    engine.activate(base, Duration::from_millis(15_000), VIEWPORT);

    // Let the strips age a little.
    for i in 1..=30u32 {
        engine.frame(base + i * 16 * MS, VIEWPORT);
    }
    assert!(engine.particles().iter().all(|p| p.life == 30));

    // Cut the run short well before the duration elapses.
    engine.deactivate();
    assert!(!engine.is_active());
    assert_eq!(engine.frame(base + 600 * MS, VIEWPORT), Frame::Idle);

    // The dropped deadlines never fire, even long past their due times.
    assert_eq!(engine.frame(base + 60_000 * MS, VIEWPORT), Frame::Idle);

    // Immediate reactivation on a different viewport seeds a fresh,
    // correctly sized burst with no survivors from the old run.
    let half = Vec2::new(600.0, 800.0);
    engine.activate(base + 700 * MS, Duration::from_millis(15_000), half);
    assert_eq!(engine.particles().len(), 400);
    assert!(engine.particles().iter().all(|p| p.life == 0 && !p.settled));
}

#[test]
fn test_restart_while_active_is_a_full_restart() {
    let base = Instant::now();
    let mut engine = Engine::seeded(5);
    engine.activate(base, Duration::from_millis(2_000), VIEWPORT);
    for i in 1..=30u32 {
        engine.frame(base + i * 16 * MS, VIEWPORT);
    }

    // Re-trigger mid-run with a longer duration. The old hard stop
    // (2.65s) must be gone: the run is still drawing at 3s.
    engine.activate(base + 500 * MS, Duration::from_millis(10_000), VIEWPORT);
    assert_eq!(engine.frame_count(), 0);
    assert!(matches!(
        engine.frame(base + 3_000 * MS, VIEWPORT),
        Frame::Drawn { .. }
    ));

    // And the new one fires on the new schedule: 0.5s + 10s + 650ms.
    assert_eq!(engine.frame(base + 11_150 * MS, VIEWPORT), Frame::Cleared);
}

// ============================================================================
// Strip edge dynamics
// ============================================================================

fn strip(pos: Vec2, vel: Vec2, phase: f32) -> Particle {
    Particle {
        pos,
        vel,
        size: 10.0,
        color: 0,
        angle: 0.0,
        spin: 0.05,
        phase,
        settled: false,
        life: 0,
    }
}

#[test]
fn test_strip_drifting_off_the_right_edge_wraps_to_the_left() {
    // x starts at width + 15 moving right; once it passes width + 20 it
    // must reappear at -20.
    let mut strips = [strip(
        Vec2::new(VIEWPORT.x + 15.0, 100.0),
        Vec2::new(0.5, 0.3),
        std::f32::consts::PI, // wind starts near zero so vx stays positive
    )];

    let mut wrapped = false;
    for t in 1..=40 {
        physics::step(&mut strips, t, VIEWPORT);
        if strips[0].pos.x < 0.0 {
            assert_eq!(strips[0].pos.x, -20.0);
            wrapped = true;
            break;
        }
        assert!(strips[0].pos.x <= VIEWPORT.x + 20.0);
    }
    assert!(wrapped, "strip never wrapped");
}

#[test]
fn test_fast_strip_keeps_bouncing_until_it_settles() {
    // Dropped from high up, a strip reaches the ground fast enough that
    // its first rebounds exceed the settle threshold; it must settle
    // eventually and stay pinned at height - 2 from then on.
    let mut strips = [strip(Vec2::new(600.0, 0.0), Vec2::new(0.0, 1.4), 0.0)];

    let mut bounced_without_settling = false;
    let mut settled_at = None;
    for t in 1..=3_000 {
        let was_settled = strips[0].settled;
        physics::step(&mut strips, t, VIEWPORT);

        if !was_settled && !strips[0].settled && strips[0].vel.y < 0.0 {
            // Upward velocity while unsettled: a live bounce.
            bounced_without_settling = true;
        }
        if strips[0].settled && settled_at.is_none() {
            settled_at = Some(t);
        }
        if strips[0].settled {
            assert_eq!(strips[0].pos.y, VIEWPORT.y - 2.0);
        }
    }

    assert!(bounced_without_settling, "strip settled on first contact");
    assert!(settled_at.is_some(), "strip never settled");
}

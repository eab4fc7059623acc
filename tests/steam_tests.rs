//! Integration tests for the steam field.
//!
//! These drive the public API the way the window does: build a field, tick
//! it, and draw every visited particle onto a canvas.

use coffee_steam::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

// ============================================================================
// Curve
// ============================================================================

#[test]
fn test_curve_for_many_counts() {
    let config = SteamConfig::default();
    for n in [2usize, 3, 10, 101, 257] {
        let curve = BellCurve::generate(n, &config);
        assert_eq!(curve.x_values().len(), n);
        assert_eq!(curve.y_values().len(), n);

        let xs = curve.x_values();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        assert!((xs[n - 1] - xs[0] - 200.0).abs() < 1e-3);
        assert!(curve.y_values().iter().all(|&y| y >= 0.0 && y.is_finite()));
    }
}

// ============================================================================
// Field lifecycle
// ============================================================================

#[test]
fn test_default_field_starts_at_spawn_height() {
    let field = ParticleField::with_seed(SteamConfig::default(), 1);
    assert_eq!(field.len(), 101);
    for p in field.particles() {
        assert_eq!(p.y(), 450.0 - 200.0);
        assert!(!p.replicated);
    }
}

#[test]
fn test_rising_particles_only_move_x_and_y() {
    let mut field = ParticleField::with_seed(SteamConfig::default(), 2);
    let start: Vec<Particle> = field.particles().to_vec();

    // Peak speed is under 6px per tick, so ten ticks stay well below the respawn line.
    for _ in 0..10 {
        let before: Vec<Particle> = field.particles().to_vec();
        let stats = field.tick();
        assert_eq!(stats.respawned, 0);

        for (old, new) in before.iter().zip(field.particles()) {
            assert!((new.x() - old.x()).abs() <= 1.0);
            assert!(new.y() <= old.y());
            assert!(!new.replicated);
        }
    }

    for (first, now) in start.iter().zip(field.particles()) {
        assert!((now.x() - first.x()).abs() <= 10.0);
    }
}

#[test]
fn test_first_crossing_respawns_at_spawn_height() {
    let mut field = ParticleField::with_seed(SteamConfig::default(), 3);
    let line = field.config().respawn_line();
    let center = 50;

    let mut ticks = 0;
    loop {
        let len_before = field.len();
        let crossed = field.particles()[center].y() < line;
        field.tick();
        ticks += 1;

        if crossed {
            assert!(field.len() >= len_before);
            assert_eq!(field.particles()[center].y(), field.config().spawn_y());
            assert!(!field.particles()[center].replicated);
            break;
        }
        assert!(ticks < 200, "center particle never reached the respawn line");
    }
}

#[test]
fn test_nine_hundred_ticks() {
    let mut field = ParticleField::with_seed(SteamConfig::default(), 4);
    let mut last_len = field.len();
    let mut respawns = 0;

    for _ in 0..900 {
        let stats = field.tick();
        respawns += stats.respawned;
        assert!(field.len() >= 101);
        assert!(field.len() >= last_len);
        last_len = field.len();
    }

    // Default densities never reach the replication threshold.
    assert_eq!(field.len(), 101);
    assert!(respawns > 0);
    assert!(field
        .particles()
        .iter()
        .all(|p| p.y().is_finite() && p.y() <= field.config().spawn_y()));
}

#[test]
fn test_dense_curve_replicates() {
    // A 2px band makes the curve tall enough to cross the replication threshold.
    let config = SteamConfig::default().with_band_half_width(1.0);
    let mut field = ParticleField::with_seed(config, 5);
    assert!(field.curve().peak() > 0.5);

    let mut grew = false;
    let mut last_len = field.len();
    for _ in 0..5 {
        let stats = field.tick();
        assert!(field.len() >= last_len);
        assert_eq!(field.len(), last_len + stats.cloned);
        grew |= stats.cloned > 0;
        last_len = field.len();
    }
    assert!(grew);
}

#[test]
fn test_field_from_custom_curve() {
    let curve = BellCurve::from_values(vec![10.7, 20.2], vec![0.0, 0.0]);
    let mut field =
        ParticleField::from_curve(curve, SteamConfig::default(), SmallRng::seed_from_u64(6));
    assert_eq!(field.particles()[0].x(), 10.0);
    assert_eq!(field.particles()[1].x(), 20.0);

    // Zero density: nothing rises.
    field.tick();
    assert!(field.particles().iter().all(|p| p.y() == 250.0));
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn test_frame_draws_steam_once_risen() {
    let config = SteamConfig::default();
    let renderer = Renderer::new(&config);
    let mut canvas = Canvas::new(config.width, config.height);
    let mut field = ParticleField::with_seed(config.clone(), 7);

    let lit_above_cup = |canvas: &Canvas| {
        let (_, cup_y) = config.cup_origin();
        (0..cup_y)
            .flat_map(|y| (0..config.width as i32).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) != Some(coffee_steam::render::BLACK))
            .count()
    };

    renderer.begin_frame(&mut canvas);
    field.tick_with(|p| renderer.draw_particle(&mut canvas, p));
    assert_eq!(lit_above_cup(&canvas), 0);

    for _ in 0..30 {
        renderer.begin_frame(&mut canvas);
        field.tick_with(|p| renderer.draw_particle(&mut canvas, p));
    }
    assert!(lit_above_cup(&canvas) > 0);
}

#[test]
fn test_frame_clock_drives_fixed_rate() {
    use std::time::{Duration, Instant};

    let start = Instant::now();
    let mut clock = FrameClock::starting_at(30, start);
    let mut frames = 0;
    let mut now = start;
    while now < start + Duration::from_secs(1) {
        if clock.is_due(now) {
            clock.tick(now);
            frames += 1;
        }
        now += Duration::from_millis(1);
    }
    assert!((29..=31).contains(&frames), "ran {frames} frames");
}

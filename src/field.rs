//! The steam particle field and its update/respawn rules.
//!
//! Particles live in an ordered, growable vector. A particle's index picks its
//! density from the [`BellCurve`], wrapping once the field has grown past the
//! curve's length. Each tick every particle either rises or, once it passes
//! the respawn line, is replaced in place by a fresh particle at the bottom.
//! A respawn with enough density also inserts clones right after the slot;
//! those clones are visited later in the same tick.
//!
//! # Example
//!
//! ```ignore
//! use coffee_steam::prelude::*;
//!
//! let mut field = ParticleField::with_seed(SteamConfig::default(), 7);
//! for _ in 0..900 {
//!     field.tick();
//! }
//! assert!(field.len() >= 101);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::SteamConfig;
use crate::curve::BellCurve;
use crate::particle::Particle;

/// What happened to a particle during one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Moved up (and sideways by the jitter).
    Rising,
    /// Passed the respawn line and was replaced by a fresh particle.
    Respawned {
        /// The particle that left the field, flagged as `replicated`.
        retired: Particle,
        /// Number of clones inserted right after the slot.
        clones: usize,
    },
}

/// Counters for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Particles visited, including clones inserted during the tick.
    pub visited: usize,
    /// Particles that respawned.
    pub respawned: usize,
    /// Clones inserted by respawns.
    pub cloned: usize,
}

/// Ordered collection of steam particles sharing one bell curve.
pub struct ParticleField {
    particles: Vec<Particle>,
    curve: BellCurve,
    config: SteamConfig,
    rng: SmallRng,
}

impl ParticleField {
    /// Create a field with `config.particle_count` particles and an entropy-seeded RNG.
    pub fn new(config: SteamConfig) -> Self {
        let curve = BellCurve::generate(config.particle_count, &config);
        Self::from_curve(curve, config, SmallRng::from_entropy())
    }

    /// Create a field whose jitter is reproducible for a given seed.
    pub fn with_seed(config: SteamConfig, seed: u64) -> Self {
        let curve = BellCurve::generate(config.particle_count, &config);
        Self::from_curve(curve, config, SmallRng::seed_from_u64(seed))
    }

    /// Create a field with one particle per curve sample.
    ///
    /// Starting x positions are truncated to whole pixels.
    pub fn from_curve(curve: BellCurve, config: SteamConfig, rng: SmallRng) -> Self {
        let spawn_y = config.spawn_y();
        let particles = curve
            .x_values()
            .iter()
            .map(|&x| Particle::spawn(x.trunc(), spawn_y))
            .collect();

        Self {
            particles,
            curve,
            config,
            rng,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn curve(&self) -> &BellCurve {
        &self.curve
    }

    #[inline]
    pub fn config(&self) -> &SteamConfig {
        &self.config
    }

    /// Advance the particle at `index` by one step.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn step(&mut self, index: usize) -> StepOutcome {
        let reach = self.config.x_displacement;
        let jitter = self.rng.gen_range(-reach..=reach) as f32;
        let density = self.curve.density(index);
        let dy = -(density * self.config.velocity_scale);

        if self.particles[index].is_past(self.config.respawn_line()) {
            return self.respawn(index, density);
        }

        self.particles[index].update(jitter, dy);
        StepOutcome::Rising
    }

    fn respawn(&mut self, index: usize, density: f32) -> StepOutcome {
        let spawn_y = self.config.spawn_y();
        let x = self.particles[index].x();

        let mut retired = std::mem::replace(&mut self.particles[index], Particle::spawn(x, spawn_y));
        retired.replicated = true;

        let clones = if density > self.config.replication_threshold {
            (density * self.config.replication_factor).floor() as usize
        } else {
            0
        };

        if clones > 0 {
            let at = index + 1;
            self.particles.splice(
                at..at,
                std::iter::repeat(Particle::spawn(x, spawn_y)).take(clones),
            );
            log::debug!(
                "particle {} respawned with {} clones, field now {}",
                index,
                clones,
                self.particles.len()
            );
        }

        StepOutcome::Respawned { retired, clones }
    }

    /// Advance every particle once.
    pub fn tick(&mut self) -> TickStats {
        self.tick_with(|_| {})
    }

    /// Advance every particle once, handing each to `visit` right after its step.
    ///
    /// The loop re-reads the length each iteration, so clones inserted by a
    /// respawn are stepped and visited in the same tick. A respawning particle
    /// is visited as it was when it left the field.
    pub fn tick_with<F>(&mut self, mut visit: F) -> TickStats
    where
        F: FnMut(&Particle),
    {
        let mut stats = TickStats::default();
        let mut index = 0;

        while index < self.particles.len() {
            match self.step(index) {
                StepOutcome::Rising => visit(&self.particles[index]),
                StepOutcome::Respawned { retired, clones } => {
                    stats.respawned += 1;
                    stats.cloned += clones;
                    visit(&retired);
                }
            }
            stats.visited += 1;
            index += 1;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_field(density: f32, count: usize, config: SteamConfig) -> ParticleField {
        let xs: Vec<f32> = (0..count).map(|i| 100.0 + i as f32).collect();
        let ys = vec![density; count];
        ParticleField::from_curve(BellCurve::from_values(xs, ys), config, SmallRng::seed_from_u64(1))
    }

    #[test]
    fn test_initial_field() {
        let field = ParticleField::with_seed(SteamConfig::default(), 0);
        assert_eq!(field.len(), 101);
        assert!(field.particles().iter().all(|p| p.y() == 250.0));
        assert_eq!(field.particles()[0].x(), 125.0);
        assert_eq!(field.particles()[100].x(), 325.0);
        assert!(field.particles().iter().all(|p| p.x().fract() == 0.0));
    }

    #[test]
    fn test_rising_step() {
        let mut field = flat_field(0.02, 3, SteamConfig::default());
        let before = field.particles()[1];
        assert_eq!(field.step(1), StepOutcome::Rising);
        let after = field.particles()[1];

        assert!((after.y() - (before.y() - 4.0)).abs() < 1e-4);
        assert!((after.x() - before.x()).abs() <= 1.0);
        assert!((after.velocity + 4.0).abs() < 1e-4);
        assert!(!after.replicated);
    }

    #[test]
    fn test_respawn_without_clones() {
        let mut field = flat_field(0.1, 2, SteamConfig::default());
        field.particles[0].position.y = 49.0;
        field.particles[0].position.x = 140.0;

        match field.step(0) {
            StepOutcome::Respawned { retired, clones } => {
                assert!(retired.replicated);
                assert_eq!(retired.y(), 49.0);
                assert_eq!(clones, 0);
            }
            other => panic!("expected respawn, got {other:?}"),
        }
        assert_eq!(field.len(), 2);
        assert_eq!(field.particles()[0], Particle::spawn(140.0, 250.0));
    }

    #[test]
    fn test_respawn_inserts_clones_after_slot() {
        let mut field = flat_field(0.73, 3, SteamConfig::default());
        field.particles[1].position.y = 10.0;

        let outcome = field.step(1);
        assert!(matches!(outcome, StepOutcome::Respawned { clones: 7, .. }));
        assert_eq!(field.len(), 10);
        for p in &field.particles()[1..9] {
            assert_eq!(p.y(), 250.0);
            assert_eq!(p.x(), 101.0);
        }
        assert_eq!(field.particles()[9].x(), 102.0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut field = flat_field(0.5, 1, SteamConfig::default());
        field.particles[0].position.y = 0.0;
        assert!(matches!(field.step(0), StepOutcome::Respawned { clones: 0, .. }));
    }

    #[test]
    fn test_clones_stepped_in_same_tick() {
        // Density 0.6 moves particles 120px per tick: from 250 to 130 to 10.
        let mut field = flat_field(0.6, 1, SteamConfig::default());
        field.particles[0].position.y = 10.0;

        let stats = field.tick();
        assert_eq!(stats.respawned, 1);
        assert_eq!(stats.cloned, 6);
        assert_eq!(stats.visited, 7);
        assert_eq!(field.len(), 7);
        assert_eq!(field.particles()[0].y(), 250.0);
        for clone in &field.particles()[1..] {
            assert!((clone.y() - 130.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_visit_sees_retired_particle() {
        let mut field = flat_field(0.1, 2, SteamConfig::default());
        field.particles[0].position.y = 20.0;

        let mut seen = Vec::new();
        field.tick_with(|p| seen.push(*p));
        assert_eq!(seen.len(), 2);
        assert!(seen[0].replicated);
        assert_eq!(seen[0].y(), 20.0);
        assert!(!seen[1].replicated);
    }

    #[test]
    fn test_density_wraps_for_grown_field() {
        let xs = vec![0.0, 1.0];
        let ys = vec![0.01, 0.02];
        let mut field = ParticleField::from_curve(
            BellCurve::from_values(xs, ys),
            SteamConfig::default().with_x_displacement(0),
            SmallRng::seed_from_u64(3),
        );
        field.particles.push(Particle::spawn(5.0, 250.0));
        field.particles.push(Particle::spawn(6.0, 250.0));

        field.tick();
        let expected = [-2.0, -4.0, -2.0, -4.0];
        for (p, want) in field.particles().iter().zip(expected) {
            assert!((p.velocity - want).abs() < 1e-4);
        }
    }

    #[test]
    fn test_length_never_shrinks() {
        let mut field = ParticleField::with_seed(SteamConfig::default(), 11);
        let mut last = field.len();
        for _ in 0..300 {
            field.tick();
            assert!(field.len() >= last);
            last = field.len();
        }
    }

    #[test]
    fn test_empty_field_ticks() {
        let mut field = ParticleField::with_seed(SteamConfig::default().with_particle_count(0), 0);
        assert!(field.is_empty());
        assert_eq!(field.tick(), TickStats::default());
    }
}

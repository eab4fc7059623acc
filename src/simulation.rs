//! Simulation builder and runner

use rand::rngs::SmallRng;
use rand::SeedableRng;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::SteamConfig;
use crate::curve::BellCurve;
use crate::error::SimulationError;
use crate::field::ParticleField;
use crate::window::App;

/// The steam animation.
///
/// Use method chaining to configure, then call `.run()` to open the window.
pub struct Simulation {
    config: SteamConfig,
    seed: Option<u64>,
}

impl Simulation {
    /// Create a simulation with the default coffee cup scene.
    pub fn new() -> Self {
        Self {
            config: SteamConfig::default(),
            seed: None,
        }
    }

    /// Replace all constants at once.
    pub fn with_config(mut self, config: SteamConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of particles (and curve samples).
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.config.particle_count = count;
        self
    }

    /// Make the horizontal jitter reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &SteamConfig {
        &self.config
    }

    /// Build the particle field this simulation starts from.
    pub fn build_field(&self) -> ParticleField {
        let curve = BellCurve::generate(self.config.particle_count, &self.config);
        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        ParticleField::from_curve(curve, self.config.clone(), rng)
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        let field = self.build_field();

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(field);
        event_loop.run_app(&mut app)?;

        match app.take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_count() {
        let sim = Simulation::new().with_particle_count(33);
        assert_eq!(sim.config().particle_count, 33);
        assert_eq!(sim.build_field().len(), 33);
    }

    #[test]
    fn test_seeded_fields_match() {
        let mut a = Simulation::new().with_seed(5).build_field();
        let mut b = Simulation::new().with_seed(5).build_field();
        for _ in 0..60 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.particles(), b.particles());
    }
}

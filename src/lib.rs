//! # Coffee Steam
//!
//! An animated ASCII picture of steam rising from a coffee cup.
//!
//! The steam is a particle field. At startup a bell curve is sampled across a
//! 200 pixel band above the cup; each particle rises at a speed proportional
//! to the density at its index, jitters sideways by a pixel per frame, and is
//! drawn as `'|'`, `'.'` or nothing depending on its height. Particles that
//! rise past the respawn line start over at the bottom.
//!
//! ## Quick Start
//!
//! ```ignore
//! use coffee_steam::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::new().run()
//! }
//! ```
//!
//! ## Headless
//!
//! The field runs without a window, which is how the tests drive it:
//!
//! ```ignore
//! use coffee_steam::prelude::*;
//!
//! let config = SteamConfig::default();
//! let mut field = ParticleField::with_seed(config.clone(), 42);
//! let renderer = Renderer::new(&config);
//! let mut canvas = Canvas::new(config.width, config.height);
//!
//! renderer.begin_frame(&mut canvas);
//! field.tick_with(|p| renderer.draw_particle(&mut canvas, p));
//! ```

pub mod config;
pub mod curve;
mod error;
pub mod field;
mod gpu;
pub mod particle;
pub mod render;
mod simulation;
pub mod time;
mod window;

pub use config::SteamConfig;
pub use curve::BellCurve;
pub use error::{GpuError, SimulationError};
pub use field::{ParticleField, StepOutcome, TickStats};
pub use glam::Vec2;
pub use particle::{Glyph, Particle};
pub use render::{Canvas, Renderer};
pub use simulation::Simulation;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use coffee_steam::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::SteamConfig;
    pub use crate::curve::BellCurve;
    pub use crate::error::{GpuError, SimulationError};
    pub use crate::field::{ParticleField, StepOutcome, TickStats};
    pub use crate::particle::{Glyph, Particle};
    pub use crate::render::{Canvas, Renderer};
    pub use crate::simulation::Simulation;
    pub use crate::time::FrameClock;
    pub use crate::Vec2;
}

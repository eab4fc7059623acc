//! Fixed constants for the steam field, the renderer and the frame clock.
//!
//! Everything the simulation needs lives in a single [`SteamConfig`] value.
//! The defaults reproduce the classic 450×450 coffee cup scene; the `with_*`
//! builders exist so tests and benches can shrink or exaggerate the scene.

/// Window, field, and timing constants.
#[derive(Debug, Clone, PartialEq)]
pub struct SteamConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Number of particles (and curve samples) created at startup.
    pub particle_count: usize,
    /// Half the width of the horizontal band the curve spans.
    pub band_half_width: f32,
    /// Added to the mean of the x samples to get the curve's mean.
    pub mean_offset: f32,
    /// The curve's standard deviation is `std(x) / std_divisor`.
    pub std_divisor: f32,
    /// Multiplier turning a density value into upward pixels per tick.
    pub velocity_scale: f32,
    /// Horizontal jitter is drawn uniformly from `-x_displacement..=x_displacement`.
    pub x_displacement: i32,
    /// Scales the height of the respawn line.
    pub y_displacement: f32,
    /// Particles spawn this many pixels above the bottom edge.
    pub spawn_offset: f32,
    /// Respawning particles clone themselves when their density exceeds this.
    pub replication_threshold: f32,
    /// Number of clones is `floor(density * replication_factor)`.
    pub replication_factor: f32,
    /// Frames per second of the main loop.
    pub tick_rate: u32,
    /// Particles above `height - bar_band` draw as `'|'`.
    pub bar_band: f32,
    /// Particles above `height - dot_band` (and below the bar band) draw as `'.'`.
    pub dot_band: f32,
    /// Particle glyphs are shifted left by this many pixels.
    pub glyph_x_offset: f32,
    /// The cup art starts at `width / 2 - cup_x_offset`.
    pub cup_x_offset: i32,
    /// The cup art starts at `height - cup_y_offset`.
    pub cup_y_offset: i32,
    /// Vertical pitch between lines of the cup art.
    pub line_height: i32,
    /// Window title.
    pub title: String,
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            width: 450,
            height: 450,
            particle_count: 101,
            band_half_width: 100.0,
            mean_offset: 1.0,
            std_divisor: 4.0,
            velocity_scale: 200.0,
            x_displacement: 1,
            y_displacement: 10.0,
            spawn_offset: 200.0,
            replication_threshold: 0.5,
            replication_factor: 10.0,
            tick_rate: 30,
            bar_band: 280.0,
            dot_band: 210.0,
            glyph_x_offset: 10.0,
            cup_x_offset: 270,
            cup_y_offset: 240,
            line_height: 10,
            title: "Particle System".to_string(),
        }
    }
}

impl SteamConfig {
    /// Set the canvas size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the initial particle count.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the half-width of the band the curve spans.
    pub fn with_band_half_width(mut self, half_width: f32) -> Self {
        self.band_half_width = half_width;
        self
    }

    /// Set the density-to-velocity multiplier.
    pub fn with_velocity_scale(mut self, scale: f32) -> Self {
        self.velocity_scale = scale;
        self
    }

    /// Set the horizontal jitter range.
    pub fn with_x_displacement(mut self, displacement: i32) -> Self {
        self.x_displacement = displacement.max(0);
        self
    }

    /// Set the frame rate of the main loop.
    pub fn with_tick_rate(mut self, rate: u32) -> Self {
        self.tick_rate = rate.max(1);
        self
    }

    /// Y coordinate fresh particles start at.
    #[inline]
    pub fn spawn_y(&self) -> f32 {
        self.height as f32 - self.spawn_offset
    }

    /// Particles with `y` above (less than) this line respawn.
    #[inline]
    pub fn respawn_line(&self) -> f32 {
        self.height as f32 - self.y_displacement * 10.0 - 300.0
    }

    /// Horizontal center of the canvas.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width as f32 / 2.0
    }

    /// Top-left corner of the cup art.
    #[inline]
    pub fn cup_origin(&self) -> (i32, i32) {
        (
            self.width as i32 / 2 - self.cup_x_offset,
            self.height as i32 - self.cup_y_offset,
        )
    }
}

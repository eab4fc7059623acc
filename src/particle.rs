//! A single steam particle.

use glam::Vec2;

/// Character a particle draws as, chosen by height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// High above the cup.
    Bar,
    /// Just above the cup.
    Dot,
    /// Still inside the cup; draws nothing.
    Blank,
}

impl Glyph {
    /// Character rendered for this glyph.
    pub fn as_char(self) -> char {
        match self {
            Glyph::Bar => '|',
            Glyph::Dot => '.',
            Glyph::Blank => ' ',
        }
    }
}

/// One wisp of steam.
///
/// Screen coordinates: `y` grows downward, so rising means `y` decreasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current position in canvas pixels.
    pub position: Vec2,
    /// Vertical delta applied on the last update.
    pub velocity: f32,
    /// Set once this particle has been retired by a respawn.
    pub replicated: bool,
}

impl Particle {
    /// Fresh particle at `x` and the given spawn height.
    pub fn spawn(x: f32, spawn_y: f32) -> Self {
        Self {
            position: Vec2::new(x, spawn_y),
            velocity: 0.0,
            replicated: false,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Move by `(dx, dy)` and remember `dy` as the current velocity.
    pub fn update(&mut self, dx: f32, dy: f32) {
        self.position += Vec2::new(dx, dy);
        self.velocity = dy;
    }

    /// Whether the particle has risen past `line` and is due for a respawn.
    #[inline]
    pub fn is_past(&self, line: f32) -> bool {
        self.position.y < line && !self.replicated
    }

    /// Glyph for this particle given the two band lines (in canvas y).
    pub fn glyph(&self, bar_line: f32, dot_line: f32) -> Glyph {
        if self.position.y < bar_line {
            Glyph::Bar
        } else if self.position.y < dot_line {
            Glyph::Dot
        } else {
            Glyph::Blank
        }
    }
}

//! CPU rasterization of the scene.
//!
//! Each frame is drawn into a [`Canvas`], an RGBA8 framebuffer the size of
//! the window, and then handed to the GPU for presentation. Text is drawn
//! with the built-in bitmap [`font`]; anything outside the canvas is clipped.

pub mod cup;
pub mod font;

use crate::config::SteamConfig;
use crate::particle::Particle;

/// RGBA color, 8 bits per channel.
pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0, 0, 0, 255];
pub const WHITE: Rgba = [255, 255, 255, 255];

/// RGBA8 framebuffer, row-major, top-left origin.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes, ready for a texture upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Fill the whole canvas with `color`.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set one pixel; out-of-bounds writes are ignored.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Draw `c` with its cell's top-left corner at `(x, y)`.
    pub fn draw_char(&mut self, c: char, x: i32, y: i32, color: Rgba) {
        for (col, row) in font::lit_pixels(c) {
            self.put(x + col, y + row, color);
        }
    }

    /// Draw a line of text starting at `(x, y)`, one cell per character.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgba) {
        for (i, c) in text.chars().enumerate() {
            let cx = x + i as i32 * font::CELL_WIDTH;
            if cx >= self.width as i32 {
                break;
            }
            self.draw_char(c, cx, y, color);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

/// Draws the cup and the particles onto a canvas.
#[derive(Debug, Clone)]
pub struct Renderer {
    bar_line: f32,
    dot_line: f32,
    glyph_x_offset: f32,
    cup_origin: (i32, i32),
    line_height: i32,
    background: Rgba,
    foreground: Rgba,
}

impl Renderer {
    pub fn new(config: &SteamConfig) -> Self {
        let height = config.height as f32;
        Self {
            bar_line: height - config.bar_band,
            dot_line: height - config.dot_band,
            glyph_x_offset: config.glyph_x_offset,
            cup_origin: config.cup_origin(),
            line_height: config.line_height,
            background: BLACK,
            foreground: WHITE,
        }
    }

    /// Clear the canvas and draw the cup.
    pub fn begin_frame(&self, canvas: &mut Canvas) {
        canvas.clear(self.background);
        self.draw_cup(canvas);
    }

    /// Draw the cup art line by line.
    pub fn draw_cup(&self, canvas: &mut Canvas) {
        let (x, y) = self.cup_origin;
        for (i, line) in cup::lines().enumerate() {
            canvas.draw_text(line, x, y + i as i32 * self.line_height, self.foreground);
        }
    }

    /// Draw a particle's glyph, shifted left by the glyph offset.
    pub fn draw_particle(&self, canvas: &mut Canvas, particle: &Particle) {
        let c = particle.glyph(self.bar_line, self.dot_line).as_char();
        let x = (particle.x() - self.glyph_x_offset).floor() as i32;
        let y = particle.y().floor() as i32;
        canvas.draw_char(c, x, y, self.foreground);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_count(canvas: &Canvas) -> usize {
        canvas.as_bytes().chunks_exact(4).filter(|px| px[0] == 255).count()
    }

    #[test]
    fn test_canvas_new_is_black() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.as_bytes().len(), 48);
        assert_eq!(canvas.pixel(3, 2), Some(BLACK));
        assert_eq!(canvas.pixel(4, 0), None);
        assert_eq!(canvas.pixel(-1, 0), None);
    }

    #[test]
    fn test_put_clips() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put(-1, 2, WHITE);
        canvas.put(2, 9, WHITE);
        assert_eq!(lit_count(&canvas), 0);
        canvas.put(1, 1, WHITE);
        assert_eq!(canvas.pixel(1, 1), Some(WHITE));
    }

    #[test]
    fn test_draw_char_partially_offscreen() {
        let mut canvas = Canvas::new(20, 20);
        // Column 2 of '|' lands on x = 0.
        canvas.draw_char('|', -2, 0, WHITE);
        assert_eq!(lit_count(&canvas), 7);
        assert_eq!(canvas.pixel(0, font::GLYPH_TOP), Some(WHITE));
    }

    #[test]
    fn test_draw_text_advances_by_cell() {
        let mut canvas = Canvas::new(30, 12);
        canvas.draw_text("| |", 0, 0, WHITE);
        assert_eq!(canvas.pixel(2, 4), Some(WHITE));
        assert_eq!(canvas.pixel(8, 4), Some(BLACK));
        assert_eq!(canvas.pixel(14, 4), Some(WHITE));
    }

    #[test]
    fn test_particle_glyph_placement() {
        let config = SteamConfig::default();
        let renderer = Renderer::new(&config);
        let mut canvas = Canvas::new(config.width, config.height);

        // y = 100 is in the bar band; drawn 10px left of x.
        renderer.draw_particle(&mut canvas, &Particle::spawn(200.0, 100.0));
        assert_eq!(lit_count(&canvas), 7);
        assert_eq!(canvas.pixel(192, 100 + font::GLYPH_TOP), Some(WHITE));

        // Spawn height draws nothing.
        canvas.clear(BLACK);
        renderer.draw_particle(&mut canvas, &Particle::spawn(200.0, 250.0));
        assert_eq!(lit_count(&canvas), 0);
    }

    #[test]
    fn test_begin_frame_draws_cup_below_steam() {
        let config = SteamConfig::default();
        let renderer = Renderer::new(&config);
        let mut canvas = Canvas::new(config.width, config.height);
        canvas.put(10, 10, WHITE);

        renderer.begin_frame(&mut canvas);
        assert_eq!(canvas.pixel(10, 10), Some(BLACK));
        assert!(lit_count(&canvas) > 0);

        let (_, cup_y) = config.cup_origin();
        let above_cup = canvas.as_bytes()[..(cup_y as usize * config.width as usize * 4)]
            .chunks_exact(4)
            .filter(|px| px[0] == 255)
            .count();
        assert_eq!(above_cup, 0);
    }
}

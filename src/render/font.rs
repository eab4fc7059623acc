//! Tiny monospace bitmap font.
//!
//! Only the characters the scene draws are present: the particle glyphs and
//! the shading characters of the cup art. Each glyph is 5×7 pixels, one byte
//! per row with bit 4 as the leftmost column, placed inside a 6×10 cell.

/// Cell width in pixels, including one column of spacing.
pub const CELL_WIDTH: i32 = 6;
/// Cell height in pixels.
pub const CELL_HEIGHT: i32 = 10;
/// Glyph width in pixels.
pub const GLYPH_WIDTH: i32 = 5;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: i32 = 7;
/// Rows of empty space above the glyph inside its cell.
pub const GLYPH_TOP: i32 = 2;

/// Bitmap rows for `c`, or `None` for characters that draw nothing.
pub fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '=' => [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '*' => [0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000],
        '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '%' => [0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011],
        '|' => [0b00100; 7],
        _ => return None,
    };
    Some(rows)
}

/// Iterate the lit pixels of `c` as `(column, row)` offsets inside its cell.
pub fn lit_pixels(c: char) -> impl Iterator<Item = (i32, i32)> {
    let rows = glyph(c).unwrap_or([0; 7]);
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        let bits = rows[row as usize];
        (0..GLYPH_WIDTH)
            .filter(move |col| bits & (0b10000 >> col) != 0)
            .map(move |col| (col, row + GLYPH_TOP))
    })
}

//! Human-readable caption text.
//!
//! Uses the Spleen 12×24 bitmap font, close to the 10 pt caption size at
//! 203 DPI.

use spleen_font::{FONT_12X24, PSF2Font};

use super::raster::LabelRaster;

pub const CHAR_WIDTH: usize = 12;
pub const CHAR_HEIGHT: usize = 24;

/// Generate a glyph bitmap for a character.
/// Returns `CHAR_WIDTH * CHAR_HEIGHT` bytes, 1 = black.
pub fn generate_glyph(ch: char) -> Vec<u8> {
    let mut glyph = vec![0u8; CHAR_WIDTH * CHAR_HEIGHT];

    let Ok(mut spleen) = PSF2Font::new(FONT_12X24) else {
        draw_box(&mut glyph, CHAR_WIDTH, CHAR_HEIGHT);
        return glyph;
    };
    let utf8_bytes = ch.to_string();

    if let Some(spleen_glyph) = spleen.glyph_for_utf8(utf8_bytes.as_bytes()) {
        for (row_y, row) in spleen_glyph.enumerate() {
            for (col_x, on) in row.enumerate() {
                if row_y < CHAR_HEIGHT && col_x < CHAR_WIDTH && on {
                    glyph[row_y * CHAR_WIDTH + col_x] = 1;
                }
            }
        }
    } else {
        // Unknown chars get a box
        draw_box(&mut glyph, CHAR_WIDTH, CHAR_HEIGHT);
    }

    glyph
}

/// Width of `text` in dots when drawn with [`draw_text`].
pub fn text_width(text: &str) -> usize {
    text.chars().count() * CHAR_WIDTH
}

/// Draw `text` with its top-left corner at `(x, y)`, clipped to `clip`.
pub fn draw_text(
    raster: &mut LabelRaster,
    text: &str,
    x: usize,
    y: usize,
    clip: (usize, usize, usize, usize),
) {
    let (cx0, cy0, cx1, cy1) = clip;
    for (i, ch) in text.chars().enumerate() {
        let glyph = generate_glyph(ch);
        let gx = x + i * CHAR_WIDTH;
        for row in 0..CHAR_HEIGHT {
            for col in 0..CHAR_WIDTH {
                let (px, py) = (gx + col, y + row);
                if glyph[row * CHAR_WIDTH + col] != 0
                    && (cx0..cx1).contains(&px)
                    && (cy0..cy1).contains(&py)
                {
                    raster.set(px, py);
                }
            }
        }
    }
}

/// Draw a box outline in the glyph buffer.
fn draw_box(glyph: &mut [u8], width: usize, height: usize) {
    for x in 0..width {
        glyph[x] = 1;
        glyph[(height - 1) * width + x] = 1;
    }
    for y in 0..height {
        glyph[y * width] = 1;
        glyph[y * width + width - 1] = 1;
    }
}

//! One-bit label bitmap.
//!
//! Pixels are stored one byte each (0 = white, 1 = black) while drawing, and
//! packed to the printer's 1-bit MSB-first row format on output.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::BarcodeError;

/// A monochrome bitmap the size of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRaster {
    pub width: usize,
    pub height: usize,
    /// Row-major, one byte per pixel, 1 = black
    pub pixels: Vec<u8>,
}

impl LabelRaster {
    /// A blank (all white) raster.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x] != 0
    }

    /// Set a pixel black. Coordinates outside the raster are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = 1;
        }
    }

    /// Blacken a rectangle, clipped to `clip` = `(x0, y0, x1, y1)` exclusive.
    pub fn fill_rect(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        clip: (usize, usize, usize, usize),
    ) {
        let (cx0, cy0, cx1, cy1) = clip;
        let x_end = (x + width).min(cx1).min(self.width);
        let y_end = (y + height).min(cy1).min(self.height);
        for py in y.max(cy0)..y_end {
            for px in x.max(cx0)..x_end {
                self.pixels[py * self.width + px] = 1;
            }
        }
    }

    /// Bytes per packed row.
    pub fn width_bytes(&self) -> usize {
        self.width.div_ceil(8)
    }

    /// Pack into 1-bit rows, MSB leftmost, as `graphics::raster` expects.
    pub fn pack(&self) -> Vec<u8> {
        let width_bytes = self.width_bytes();
        let mut data = vec![0u8; width_bytes * self.height];
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixels[y * self.width + x] != 0 {
                    data[y * width_bytes + x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        data
    }

    /// Convert to an 8-bit grayscale image (black bars on white).
    pub fn to_image(&self) -> GrayImage {
        let mut img = GrayImage::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                let color = if self.get(x, y) { 0u8 } else { 255u8 };
                img.put_pixel(x as u32, y as u32, Luma([color]));
            }
        }
        img
    }

    /// Save as PNG
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), BarcodeError> {
        self.to_image()
            .save(path.as_ref())
            .map_err(|e| BarcodeError::Image(format!("Failed to save PNG: {}", e)))
    }
}

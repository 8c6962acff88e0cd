//! # StarPRNT Raster Graphics
//!
//! The rendered label is sent as a raster image (`ESC GS S`).
//!
//! ## Bit Packing
//!
//! Each bit is one dot, MSB leftmost, 1 = black:
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! Rows are padded to a whole number of bytes.

use super::commands::{ESC, GS, u16_le};

/// Rows per raster command, to stay inside the printer's receive buffer.
pub const MAX_CHUNK_ROWS: usize = 256;

/// # Raster Graphics (ESC GS S m xL xH yL yH n d1...dk)
///
/// ## Parameters
///
/// - `m`: 1 (monochrome)
/// - `xL xH`: Width in bytes (little-endian)
/// - `yL yH`: Height in rows (little-endian)
/// - `n`: 0 (black)
/// - `d1...dk`: `width_bytes * height` bytes of row-major data
///
/// ## Example
///
/// ```
/// use barcode_printer::protocol::graphics;
///
/// let data = vec![0xAA; 80 * 10];
/// let cmd = graphics::raster(639, 10, &data);
///
/// assert_eq!(&cmd[0..3], &[0x1B, 0x1D, 0x53]);
/// assert_eq!(cmd[4], 80); // xL = 80 bytes
/// assert_eq!(cmd[6], 10); // yL = 10 rows
/// ```
///
/// ## Reference
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.12 (ESC GS S)
pub fn raster(width_dots: u16, height: u16, data: &[u8]) -> Vec<u8> {
    let width_bytes = width_dots.div_ceil(8);
    let expected_len = width_bytes as usize * height as usize;

    debug_assert!(
        data.len() == expected_len,
        "Raster data length mismatch. Expected {} ({} bytes × {} rows), got {}",
        expected_len,
        width_bytes,
        height,
        data.len()
    );

    let [xl, xh] = u16_le(width_bytes);
    let [yl, yh] = u16_le(height);

    let mut cmd = Vec::with_capacity(9 + data.len());
    cmd.push(ESC);
    cmd.push(GS);
    cmd.push(b'S');
    cmd.push(1); // m = 1 (monochrome)
    cmd.push(xl);
    cmd.push(xh);
    cmd.push(yl);
    cmd.push(yh);
    cmd.push(0); // n = 0 (black)
    cmd.extend_from_slice(data);
    cmd
}

/// Split a packed image into raster commands of at most `max_rows` rows each.
///
/// `data` must hold exactly `ceil(width_dots / 8) * height` bytes, as
/// produced by [`LabelRaster::pack`](crate::render::LabelRaster::pack).
pub fn raster_chunked(width_dots: u16, height: u16, data: &[u8], max_rows: usize) -> Vec<u8> {
    let width_bytes = width_dots.div_ceil(8) as usize;
    let max_rows = max_rows.max(1);

    debug_assert!(
        data.len() == width_bytes * height as usize,
        "Raster data length mismatch. Expected {} ({} bytes × {} rows), got {}",
        width_bytes * height as usize,
        width_bytes,
        height,
        data.len()
    );

    let mut cmd = Vec::with_capacity(data.len() + 9 * (height as usize / max_rows + 1));
    let mut row = 0usize;
    while row < height as usize {
        let rows = max_rows.min(height as usize - row);
        let chunk = &data[row * width_bytes..(row + rows) * width_bytes];
        cmd.extend(raster(width_dots, rows as u16, chunk));
        row += rows;
    }
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_header() {
        let data = vec![0xFF; 80 * 4];
        let cmd = raster(640, 4, &data);
        assert_eq!(&cmd[0..9], &[0x1B, 0x1D, b'S', 1, 80, 0, 4, 0, 0]);
        assert_eq!(cmd.len(), 9 + 80 * 4);
    }

    #[test]
    fn test_raster_rounds_width_up() {
        let data = vec![0x00; 2 * 3];
        let cmd = raster(9, 3, &data);
        assert_eq!(cmd[4], 2);
    }

    #[test]
    fn test_raster_chunked_splits() {
        let data = vec![0x0F; 10 * 600];
        let cmd = raster_chunked(80, 600, &data, 256);
        // 256 + 256 + 88 rows
        assert_eq!(cmd.len(), 3 * 9 + 10 * 600);
        assert_eq!(&cmd[0..3], &[0x1B, 0x1D, b'S']);
        assert_eq!(cmd[6], 0); // 256 = 0x0100
        assert_eq!(cmd[7], 1);
        let last = 2 * (9 + 10 * 256);
        assert_eq!(cmd[last + 6], 88);
    }

    #[test]
    fn test_raster_chunked_single() {
        let data = vec![0x0F; 10 * 20];
        assert_eq!(raster_chunked(80, 20, &data, 256), raster(80, 20, &data));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Raster data length mismatch")]
    fn test_raster_chunked_short_data() {
        let data = vec![0x0F; 10 * 19];
        raster_chunked(80, 20, &data, 8);
    }
}

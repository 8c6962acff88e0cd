//! # StarPRNT Protocol Commands
//!
//! Job framing commands for Star Micronics thermal printers: reset at the
//! start of a label, feed-and-cut at the end.
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`
//!
//! ## Reference
//!
//! Based on "StarPRNT Command Specifications Rev. 4.10"
//! by Star Micronics Co., Ltd.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used in combination with ESC for extended commands such as raster
/// graphics (`ESC GS S`).
pub const GS: u8 = 0x1D;

// ============================================================================
// JOB COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Sent at the start of
/// every label so a previous job's state cannot leak in.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ```
/// use barcode_printer::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Feed to Cut Position, Then Full Cut (ESC d 2)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d 2  |
/// | Hex     | 1B 64 02 |
///
/// Feeds the last printed row past the cutter before cutting, so the label
/// comes off whole.
#[inline]
pub fn cut_full_feed() -> Vec<u8> {
    vec![ESC, b'd', 2]
}

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ```
/// use barcode_printer::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(640), [0x80, 0x02]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

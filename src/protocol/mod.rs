//! # StarPRNT Protocol Implementation
//!
//! Low-level command builders for Star Micronics thermal printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Job framing (init, cut)
//! - [`graphics`]: Raster graphics
//!
//! ## Usage Example
//!
//! ```
//! use barcode_printer::protocol::{commands, graphics};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(graphics::raster(16, 2, &[0xFF, 0x00, 0x00, 0xFF]));
//! data.extend(commands::cut_full_feed());
//! ```

pub mod commands;
pub mod graphics;

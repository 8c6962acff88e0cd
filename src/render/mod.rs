//! # Rendering Module
//!
//! Turns encoded barcodes into a printable bitmap.
//!
//! ## Modules
//!
//! - [`label`]: Label layout (bars + caption)
//! - [`font`]: Caption text with the Spleen bitmap font
//! - [`raster`]: One-bit bitmap, packing and PNG export
//!
//! ## Usage Example
//!
//! ```
//! use barcode_printer::printer::LabelConfig;
//! use barcode_printer::protocol::graphics;
//! use barcode_printer::render;
//!
//! let raster = render::render_label("test1234", &LabelConfig::default())?;
//! let cmd = graphics::raster(raster.width as u16, raster.height as u16, &raster.pack());
//! # Ok::<(), barcode_printer::BarcodeError>(())
//! ```

pub mod font;
pub mod label;
pub mod raster;

pub use label::{render_label, render_symbols};
pub use raster::LabelRaster;

//! # Barcode Printer - Code 128 Label Library
//!
//! Encodes text as a Code 128 (Subset B) barcode and prints it on a thermal
//! label printer. It provides:
//!
//! - **Encoding**: Code 128 Subset B symbol values with modulo-103 checksum
//! - **Font mapping**: Symbol values as Code 128 font glyphs
//! - **Rendering**: Bars and caption laid out on a one-bit label bitmap
//! - **Printing**: StarPRNT raster commands over a printer device, or PNG
//!
//! ## Quick Start
//!
//! ```
//! use barcode_printer::code128;
//!
//! let symbols = code128::encode("test1234")?;
//! assert_eq!(symbols, vec![104, 84, 69, 83, 84, 17, 18, 19, 20, 58, 106]);
//! # Ok::<(), barcode_printer::code128::EncodeError>(())
//! ```
//!
//! ## Printing
//!
//! ```no_run
//! use barcode_printer::printer::{LabelConfig, PrintRequest, PrintTarget};
//!
//! let target = PrintTarget::Device("/dev/rfcomm0".into());
//! PrintRequest::new("test1234", target, LabelConfig::default()).execute()?;
//! # Ok::<(), barcode_printer::BarcodeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`code128`] | Subset B encoder, font glyphs, bar patterns |
//! | [`render`] | Label bitmap rendering |
//! | [`printer`] | Label configuration, target selection, print jobs |
//! | [`protocol`] | StarPRNT command builders |
//! | [`transport`] | Printer device I/O |
//! | [`error`] | Error types |

pub mod code128;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use code128::{EncodeError, SymbolValue, encode};
pub use error::BarcodeError;
pub use printer::{LabelConfig, PrintRequest, PrintTarget};

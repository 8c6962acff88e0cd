//! # Printer Module
//!
//! Printer discovery, output target selection and print job execution.
//!
//! ## Modules
//!
//! - [`config`]: Page setup and label layout
//!
//! ## Printing a Label
//!
//! ```no_run
//! use barcode_printer::printer::{self, LabelConfig, PrintRequest, PrintTarget};
//!
//! let available = printer::available_printers();
//! let target = PrintTarget::resolve(Some("/dev/rfcomm0"), &available);
//!
//! let request = PrintRequest::new("test1234", target, LabelConfig::default());
//! let outcome = request.execute()?;
//! println!("{}", outcome);
//! # Ok::<(), barcode_printer::BarcodeError>(())
//! ```

pub mod config;

pub use config::{LabelConfig, LabelLayout, PageSetup, Rect};

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::BarcodeError;
use crate::protocol::{commands, graphics};
use crate::render::{self, LabelRaster};
use crate::transport::{self, DeviceTransport};

/// File written when no printer is selected or the selected one is missing.
pub const FALLBACK_OUTPUT: &str = "barcode.png";

/// Printer devices present on this machine.
pub fn available_printers() -> Vec<String> {
    transport::discover_devices()
}

/// Where a label goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintTarget {
    /// A printer device node, sent StarPRNT raster commands
    Device(PathBuf),
    /// A PNG image of the label
    File(PathBuf),
}

impl PrintTarget {
    /// Select the named printer if it is available, otherwise the PNG fallback.
    ///
    /// ```
    /// use barcode_printer::printer::PrintTarget;
    ///
    /// let available = vec!["/dev/rfcomm0".to_string()];
    /// assert_eq!(
    ///     PrintTarget::resolve(Some("/dev/rfcomm0"), &available),
    ///     PrintTarget::Device("/dev/rfcomm0".into())
    /// );
    /// assert_eq!(
    ///     PrintTarget::resolve(None, &available),
    ///     PrintTarget::File("barcode.png".into())
    /// );
    /// ```
    pub fn resolve(name: Option<&str>, available: &[String]) -> Self {
        match name {
            Some(name) if available.iter().any(|p| p == name) => Self::Device(name.into()),
            _ => Self::File(FALLBACK_OUTPUT.into()),
        }
    }

    /// Whether this target is a physical printer.
    pub fn is_device(&self) -> bool {
        matches!(self, Self::Device(_))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Device(path) | Self::File(path) => path,
        }
    }
}

/// What a finished print job did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    Printed { device: PathBuf },
    Saved { path: PathBuf },
}

impl fmt::Display for PrintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Printed { device } => write!(f, "Printed on {}", device.display()),
            Self::Saved { path } => write!(f, "Saved to {}", path.display()),
        }
    }
}

/// # Print Request
///
/// Everything needed to print one barcode label: the text, where it goes and
/// how the page is laid out.
#[derive(Debug, Clone)]
pub struct PrintRequest {
    pub text: String,
    pub target: PrintTarget,
    pub label: LabelConfig,
}

impl PrintRequest {
    pub fn new(text: impl Into<String>, target: PrintTarget, label: LabelConfig) -> Self {
        Self {
            text: text.into(),
            target,
            label,
        }
    }

    /// Encode and lay out the label.
    pub fn render(&self) -> Result<LabelRaster, BarcodeError> {
        render::render_label(&self.text, &self.label)
    }

    /// StarPRNT command stream for a rendered label: reset, raster, cut.
    pub fn commands(&self, raster: &LabelRaster) -> Result<Vec<u8>, BarcodeError> {
        let width = u16::try_from(raster.width)
            .map_err(|_| BarcodeError::Layout(format!("Label too wide: {} dots", raster.width)))?;
        let height = u16::try_from(raster.height)
            .map_err(|_| BarcodeError::Layout(format!("Label too tall: {} dots", raster.height)))?;

        let mut data = Vec::new();
        data.extend(commands::init());
        data.extend(graphics::raster_chunked(
            width,
            height,
            &raster.pack(),
            graphics::MAX_CHUNK_ROWS,
        ));
        data.extend(commands::cut_full_feed());
        Ok(data)
    }

    /// Render the label and send it to the target.
    ///
    /// Nothing is opened or written unless the text encodes and the label
    /// fits, so a failed request never leaves a partial barcode behind.
    pub fn execute(&self) -> Result<PrintOutcome, BarcodeError> {
        let raster = self.render()?;

        match &self.target {
            PrintTarget::Device(device) => {
                let data = self.commands(&raster)?;
                let mut transport = DeviceTransport::open(device)?;
                transport.write_all(&data)?;
                Ok(PrintOutcome::Printed {
                    device: device.clone(),
                })
            }
            PrintTarget::File(path) => {
                raster.save_png(path)?;
                Ok(PrintOutcome::Saved { path: path.clone() })
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

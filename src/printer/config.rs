//! # Label Configuration
//!
//! This module defines the page geometry and the placement of the barcode and
//! its human-readable text on a label.
//!
//! ## Default Label
//!
//! | Property | Value |
//! |----------|-------|
//! | Page | 80 × 40 mm |
//! | Resolution | 203 DPI (≈ 8 dots/mm) |
//! | Margins | 0 mm |
//! | Barcode | x 5, y 10, 67.5 × 10 mm |
//! | Text | x 5, y 20.5, 67.5 × 5 mm |
//!
//! ```text
//! ┌──────────────────────────────── 80mm ─┐
//! │                                       │
//! │    ██ █ ██  █ ███ █  ██ █ ██ ███ █    │ ← barcode (10mm)
//! │               test1234                │ ← text (5mm)
//! │                                       │
//! └───────────────────────────────────────┘
//! ```
//!
//! ## Loading From a File
//!
//! ```no_run
//! use barcode_printer::printer::LabelConfig;
//!
//! let config = LabelConfig::load("label.json")?;
//! println!("{} x {} dots", config.page.width_dots(), config.page.height_dots());
//! # Ok::<(), barcode_printer::BarcodeError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BarcodeError;

/// # Page Setup
///
/// Physical paper size and resolution of the output surface.
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
///
/// For the 80 × 40 mm label at 203 DPI:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   width  = 80 * 8 = 639 dots
///   height = 40 * 8 = 320 dots
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSetup {
    /// Paper width in millimeters
    pub width_mm: f32,

    /// Paper height in millimeters
    pub height_mm: f32,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Unprintable border on every side, in millimeters
    pub margin_mm: f32,
}

impl PageSetup {
    /// # 80 × 40 mm Label at 203 DPI
    ///
    /// Grayscale thermal label, no margins.
    pub const LABEL_80X40: Self = Self {
        width_mm: 80.0,
        height_mm: 40.0,
        dpi: 203,
        margin_mm: 0.0,
    };

    /// Calculate dots per millimeter
    ///
    /// ```
    /// use barcode_printer::printer::PageSetup;
    ///
    /// let page = PageSetup::LABEL_80X40;
    /// assert!((page.dots_per_mm() - 8.0).abs() < 0.1);
    /// ```
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Convert millimeters to dots
    #[inline]
    pub fn mm_to_dots(&self, mm: f32) -> usize {
        (mm * self.dots_per_mm()).round().max(0.0) as usize
    }

    /// Page width in dots
    pub fn width_dots(&self) -> usize {
        self.mm_to_dots(self.width_mm)
    }

    /// Page height in dots
    pub fn height_dots(&self) -> usize {
        self.mm_to_dots(self.height_mm)
    }

    /// Margin in dots
    pub fn margin_dots(&self) -> usize {
        self.mm_to_dots(self.margin_mm)
    }

    /// Reject sizes a printer cannot produce.
    pub fn validate(&self) -> Result<(), BarcodeError> {
        if self.dpi == 0 {
            return Err(BarcodeError::Config("DPI must be positive".to_string()));
        }
        if !(self.width_mm > 0.0 && self.height_mm > 0.0) {
            return Err(BarcodeError::Config(format!(
                "Page size must be positive, got {}x{} mm",
                self.width_mm, self.height_mm
            )));
        }
        if self.margin_mm < 0.0 || self.margin_mm * 2.0 >= self.width_mm.min(self.height_mm) {
            return Err(BarcodeError::Config(format!(
                "Margin {} mm leaves no printable area",
                self.margin_mm
            )));
        }
        if self.width_dots() > u16::MAX as usize || self.height_dots() > u16::MAX as usize {
            return Err(BarcodeError::Config(format!(
                "Page is too large: {}x{} dots",
                self.width_dots(),
                self.height_dots()
            )));
        }
        Ok(())
    }

    /// Parse a page string (CLI args).
    ///
    /// Formats:
    /// - `"80x40"` → 80 × 40 mm at 203 DPI
    /// - `"80x40@300"` → 80 × 40 mm at 300 DPI
    pub fn parse(s: &str) -> Result<Self, String> {
        let (dims, dpi) = match s.split_once('@') {
            Some((dims, dpi)) => {
                let dpi: u16 = dpi.parse().map_err(|_| format!("Invalid DPI: {}", dpi))?;
                (dims, dpi)
            }
            None => (s, Self::LABEL_80X40.dpi),
        };

        let (w, h) = dims.split_once('x').ok_or_else(|| {
            format!(
                "Unknown page '{}'. Use 'WIDTHxHEIGHT' in mm, optionally '@DPI'",
                s
            )
        })?;
        let width_mm: f32 = w.parse().map_err(|_| format!("Invalid width: {}", w))?;
        let height_mm: f32 = h.parse().map_err(|_| format!("Invalid height: {}", h))?;

        let page = Self {
            width_mm,
            height_mm,
            dpi,
            ..Self::LABEL_80X40
        };
        page.validate().map_err(|e| e.to_string())?;
        Ok(page)
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::LABEL_80X40
    }
}

/// A rectangle on the page, in millimeters from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
}

impl Rect {
    pub const fn new(x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32) -> Self {
        Self {
            x_mm,
            y_mm,
            width_mm,
            height_mm,
        }
    }

    /// Convert to `(x, y, width, height)` in dots.
    pub fn to_dots(&self, page: &PageSetup) -> (usize, usize, usize, usize) {
        (
            page.mm_to_dots(self.x_mm),
            page.mm_to_dots(self.y_mm),
            page.mm_to_dots(self.width_mm),
            page.mm_to_dots(self.height_mm),
        )
    }
}

/// Where the barcode and its caption go on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelLayout {
    /// Area the bars are centered in
    pub barcode: Rect,
    /// Area the human-readable text is centered in
    pub text: Rect,
}

impl LabelLayout {
    pub const LABEL_80X40: Self = Self {
        barcode: Rect::new(5.0, 10.0, 67.5, 10.0),
        text: Rect::new(5.0, 20.5, 67.5, 5.0),
    };
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self::LABEL_80X40
    }
}

/// Page setup plus layout, as read from a JSON label file.
///
/// Every field is optional in the file:
///
/// ```json
/// {
///   "page": { "width_mm": 100, "height_mm": 50, "dpi": 203 },
///   "layout": { "barcode": { "x_mm": 5, "y_mm": 10, "width_mm": 90, "height_mm": 20 } }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub page: PageSetup,
    pub layout: LabelLayout,
}

impl LabelConfig {
    /// Parse a JSON label definition.
    pub fn from_json(json: &str) -> Result<Self, BarcodeError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BarcodeError::Config(format!("Invalid label JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON label definition from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BarcodeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            BarcodeError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), BarcodeError> {
        self.page.validate()?;
        for (name, rect) in [("barcode", &self.layout.barcode), ("text", &self.layout.text)] {
            if !(rect.width_mm > 0.0 && rect.height_mm > 0.0 && rect.x_mm >= 0.0 && rect.y_mm >= 0.0)
            {
                return Err(BarcodeError::Config(format!(
                    "Invalid {} area: {:?}",
                    name, rect
                )));
            }
            // Written so NaN fails too
            let fits = rect.x_mm + rect.width_mm <= self.page.width_mm
                && rect.y_mm + rect.height_mm <= self.page.height_mm;
            if !fits {
                return Err(BarcodeError::Config(format!(
                    "The {} area {:?} runs off the {}x{} mm page",
                    name, rect, self.page.width_mm, self.page.height_mm
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_dimensions() {
        let page = PageSetup::LABEL_80X40;
        assert_eq!(page.width_dots(), 639);
        assert_eq!(page.height_dots(), 320);
        assert_eq!(page.margin_dots(), 0);
    }

    #[test]
    fn test_dots_per_mm() {
        let page = PageSetup::LABEL_80X40;
        // 203 DPI ≈ 8 dots/mm
        assert!((page.dots_per_mm() - 8.0).abs() < 0.1);
    }

    #[test]
    fn test_mm_to_dots() {
        let page = PageSetup::LABEL_80X40;
        // 10mm ≈ 80 dots
        let dots = page.mm_to_dots(10.0);
        assert!((dots as i32 - 80).abs() < 2);
    }

    #[test]
    fn test_default_layout_fits_page() {
        let config = LabelConfig::default();
        assert!(config.validate().is_ok());
        let (x, y, w, h) = config.layout.barcode.to_dots(&config.page);
        assert!(x + w <= config.page.width_dots());
        assert!(y + h <= config.page.height_dots());
        let (x, y, w, h) = config.layout.text.to_dots(&config.page);
        assert!(x + w <= config.page.width_dots());
        assert!(y + h <= config.page.height_dots());
    }

    #[test]
    fn test_parse_page() {
        let page = PageSetup::parse("100x50").unwrap();
        assert_eq!(page.width_mm, 100.0);
        assert_eq!(page.height_mm, 50.0);
        assert_eq!(page.dpi, 203);

        let page = PageSetup::parse("58x30@300").unwrap();
        assert_eq!(page.dpi, 300);
    }

    #[test]
    fn test_parse_page_errors() {
        assert!(PageSetup::parse("a4").is_err());
        assert!(PageSetup::parse("80xabc").is_err());
        assert!(PageSetup::parse("80x40@0").is_err());
        assert!(PageSetup::parse("0x40").is_err());
    }

    #[test]
    fn test_margin_validation() {
        let page = PageSetup {
            margin_mm: 20.0,
            ..PageSetup::LABEL_80X40
        };
        assert!(page.validate().is_err());
    }

    #[test]
    fn test_json_defaults() {
        let config = LabelConfig::from_json("{}").unwrap();
        assert_eq!(config, LabelConfig::default());
    }

    #[test]
    fn test_json_partial_override() {
        let config = LabelConfig::from_json(r#"{"page": {"width_mm": 100, "dpi": 300}}"#).unwrap();
        assert_eq!(config.page.width_mm, 100.0);
        assert_eq!(config.page.height_mm, 40.0);
        assert_eq!(config.page.dpi, 300);
        assert_eq!(config.layout, LabelLayout::LABEL_80X40);
    }

    #[test]
    fn test_json_invalid() {
        assert!(matches!(
            LabelConfig::from_json("not json"),
            Err(BarcodeError::Config(_))
        ));
        assert!(matches!(
            LabelConfig::from_json(r#"{"page": {"dpi": 0}}"#),
            Err(BarcodeError::Config(_))
        ));
    }

    #[test]
    fn test_area_off_page_rejected() {
        let config = LabelConfig::from_json(
            r#"{"layout": {"barcode": {"x_mm": 40, "y_mm": 10, "width_mm": 67.5, "height_mm": 10}}}"#,
        );
        assert!(matches!(config, Err(BarcodeError::Config(_))));

        let config = LabelConfig::from_json(
            r#"{"layout": {"text": {"x_mm": 5, "y_mm": 38, "width_mm": 67.5, "height_mm": 5}}}"#,
        );
        assert!(matches!(config, Err(BarcodeError::Config(_))));
    }

    #[test]
    fn test_huge_area_rejected() {
        let config = LabelConfig::from_json(
            r#"{"layout": {"barcode": {"x_mm": 1e20, "y_mm": 10, "width_mm": 67.5, "height_mm": 10}}}"#,
        );
        assert!(matches!(config, Err(BarcodeError::Config(_))));

        let config = LabelConfig {
            layout: LabelLayout {
                text: Rect::new(f32::NAN, 20.5, 67.5, 5.0),
                ..LabelLayout::LABEL_80X40
            },
            ..LabelConfig::default()
        };
        assert!(matches!(config.validate(), Err(BarcodeError::Config(_))));
    }

    #[test]
    fn test_area_touching_page_edge_accepted() {
        let config = LabelConfig {
            layout: LabelLayout {
                barcode: Rect::new(0.0, 0.0, 80.0, 40.0),
                ..LabelLayout::LABEL_80X40
            },
            ..LabelConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            LabelConfig::load("/nonexistent/label.json"),
            Err(BarcodeError::Config(_))
        ));
    }
}

//! Label layout: bars in the barcode area, caption in the text area.
//!
//! Both are centered horizontally and vertically in their areas. Bars use
//! the widest whole number of dots per module that fits, so every bar keeps
//! its exact width ratio.

use crate::code128::{self, SymbolValue, bars};
use crate::error::BarcodeError;
use crate::printer::LabelConfig;

use super::font;
use super::raster::LabelRaster;

/// Render `text` as a barcode label.
///
/// ## Errors
///
/// - [`BarcodeError::Encode`] if `text` is not printable ASCII
/// - [`BarcodeError::Config`] if a layout area runs off the page
/// - [`BarcodeError::Layout`] if the bars do not fit the barcode area or
///   cross into the page margin
///
/// ## Example
///
/// ```
/// use barcode_printer::printer::LabelConfig;
/// use barcode_printer::render;
///
/// let raster = render::render_label("test1234", &LabelConfig::default())?;
/// assert_eq!(raster.width, 639);
/// assert_eq!(raster.height, 320);
/// # Ok::<(), barcode_printer::BarcodeError>(())
/// ```
pub fn render_label(text: &str, config: &LabelConfig) -> Result<LabelRaster, BarcodeError> {
    let symbols = code128::encode(text)?;
    render_symbols(&symbols, text, config)
}

/// Render an already encoded symbol sequence with `caption` below it.
pub fn render_symbols(
    symbols: &[SymbolValue],
    caption: &str,
    config: &LabelConfig,
) -> Result<LabelRaster, BarcodeError> {
    config.validate()?;

    let page = &config.page;
    let mut raster = LabelRaster::new(page.width_dots(), page.height_dots());
    let margin = page.margin_dots();
    let clip = (
        margin,
        margin,
        raster.width.saturating_sub(margin),
        raster.height.saturating_sub(margin),
    );

    // Bars
    let modules = bars::modules(symbols);
    let (bx, by, bw, bh) = config.layout.barcode.to_dots(page);
    let module_dots = module_width(modules.len(), bw)?;
    let bars_width = modules.len() * module_dots;
    let bars_x = bx.saturating_add((bw - bars_width) / 2);
    let bars_end = bars_x.saturating_add(bars_width);
    let bars_bottom = by.saturating_add(bh);
    if bars_x < clip.0 || by < clip.1 || bars_end > clip.2 || bars_bottom > clip.3 {
        return Err(BarcodeError::Layout(format!(
            "Bars at {}..{} x {}..{} dots leave the printable area {}..{} x {}..{}",
            bars_x, bars_end, by, bars_bottom, clip.0, clip.2, clip.1, clip.3
        )));
    }
    for (i, &is_bar) in modules.iter().enumerate() {
        if is_bar {
            raster.fill_rect(bars_x + i * module_dots, by, module_dots, bh, clip);
        }
    }

    // Caption
    let (tx, ty, tw, th) = config.layout.text.to_dots(page);
    let text_x = tx.saturating_add(tw.saturating_sub(font::text_width(caption)) / 2);
    let text_y = ty.saturating_add(th.saturating_sub(font::CHAR_HEIGHT) / 2);
    let text_clip = (
        clip.0.max(tx),
        clip.1.max(ty),
        clip.2.min(tx.saturating_add(tw)),
        clip.3.min(ty.saturating_add(th)),
    );
    font::draw_text(&mut raster, caption, text_x, text_y, text_clip);

    Ok(raster)
}

/// Widest module (in dots) that fits `modules` into `available` dots.
pub fn module_width(modules: usize, available: usize) -> Result<usize, BarcodeError> {
    match available.checked_div(modules) {
        Some(width) if width > 0 => Ok(width),
        _ => Err(BarcodeError::Layout(format!(
            "Barcode needs {} modules but the barcode area is only {} dots wide",
            modules, available
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::{LabelLayout, PageSetup, Rect};

    fn black_columns(raster: &LabelRaster, y: usize) -> Vec<usize> {
        (0..raster.width).filter(|&x| raster.get(x, y)).collect()
    }

    #[test]
    fn test_module_width() {
        // "test1234": 11 symbols -> 123 modules in 539 dots
        assert_eq!(module_width(123, 539).unwrap(), 4);
        assert_eq!(module_width(539, 539).unwrap(), 1);
        assert!(module_width(540, 539).is_err());
        assert!(module_width(0, 539).is_err());
    }

    #[test]
    fn test_bars_centered() {
        let config = LabelConfig::default();
        let raster = render_label("test1234", &config).unwrap();
        let (bx, by, bw, bh) = config.layout.barcode.to_dots(&config.page);

        let cols = black_columns(&raster, by + bh / 2);
        let first = *cols.first().unwrap();
        let last = *cols.last().unwrap();
        // 123 modules * 4 dots = 492 dots, centered in 539
        assert_eq!(last - first + 1, 492);
        assert_eq!(first, bx + (bw - 492) / 2);
    }

    #[test]
    fn test_bars_span_barcode_height() {
        let config = LabelConfig::default();
        let raster = render_label("A", &config).unwrap();
        let (_, by, _, bh) = config.layout.barcode.to_dots(&config.page);
        let x = black_columns(&raster, by)[0];
        assert!(raster.get(x, by));
        assert!(raster.get(x, by + bh - 1));
        assert!(!raster.get(x, by + bh));
        assert!(!raster.get(x, by - 1));
    }

    #[test]
    fn test_bar_widths_follow_modules() {
        let config = LabelConfig::default();
        let raster = render_label("A", &config).unwrap();
        let (_, by, _, _) = config.layout.barcode.to_dots(&config.page);
        let cols = black_columns(&raster, by);
        let module_dots = module_width(46, config.layout.barcode.to_dots(&config.page).2).unwrap();

        // START B begins with a 2-module bar
        let first = cols[0];
        assert!(raster.get(first + 2 * module_dots - 1, by));
        assert!(!raster.get(first + 2 * module_dots, by));
    }

    #[test]
    fn test_caption_drawn() {
        let config = LabelConfig::default();
        let raster = render_label("test1234", &config).unwrap();
        let (_, ty, _, th) = config.layout.text.to_dots(&config.page);
        assert!((ty..ty + th).any(|y| !black_columns(&raster, y).is_empty()));
    }

    #[test]
    fn test_nothing_outside_layout() {
        let config = LabelConfig::default();
        let raster = render_label("Hello", &config).unwrap();
        let (_, by, _, _) = config.layout.barcode.to_dots(&config.page);
        assert!((0..by).all(|y| black_columns(&raster, y).is_empty()));
    }

    #[test]
    fn test_too_long_for_layout() {
        // 64 characters: 67 symbols -> 739 modules > 539 dots
        let text = "x".repeat(64);
        assert!(matches!(
            render_label(&text, &LabelConfig::default()),
            Err(BarcodeError::Layout(_))
        ));
    }

    #[test]
    fn test_wider_page_fits_long_text() {
        let config = LabelConfig {
            page: PageSetup {
                width_mm: 120.0,
                ..PageSetup::LABEL_80X40
            },
            layout: LabelLayout {
                barcode: Rect::new(5.0, 10.0, 110.0, 10.0),
                ..LabelLayout::LABEL_80X40
            },
        };
        let text = "x".repeat(64);
        assert!(render_label(&text, &config).is_ok());
    }

    #[test]
    fn test_invalid_text_rejected() {
        assert!(matches!(
            render_label("café", &LabelConfig::default()),
            Err(BarcodeError::Encode(_))
        ));
    }

    #[test]
    fn test_margin_clear_of_bars_accepted() {
        // 5 mm = 40 dots, bars start at 63 and end at 555 of 639
        let config = LabelConfig {
            page: PageSetup {
                margin_mm: 5.0,
                ..PageSetup::LABEL_80X40
            },
            ..LabelConfig::default()
        };
        assert!(render_label("test1234", &config).is_ok());
    }

    #[test]
    fn test_margin_overlapping_bars_rejected() {
        // 8 mm = 64 dots, but the bars start at dot 63
        let config = LabelConfig {
            page: PageSetup {
                margin_mm: 8.0,
                ..PageSetup::LABEL_80X40
            },
            ..LabelConfig::default()
        };
        assert!(matches!(
            render_label("test1234", &config),
            Err(BarcodeError::Layout(_))
        ));
    }

    #[test]
    fn test_margin_overlapping_bar_height_rejected() {
        // 12 mm = 96 dots, inside the 80..160 bar rows
        let config = LabelConfig {
            page: PageSetup {
                margin_mm: 12.0,
                ..PageSetup::LABEL_80X40
            },
            layout: LabelLayout {
                barcode: Rect::new(20.0, 10.0, 40.0, 10.0),
                ..LabelLayout::LABEL_80X40
            },
        };
        assert!(matches!(
            render_label("A", &config),
            Err(BarcodeError::Layout(_))
        ));
    }

    #[test]
    fn test_off_page_area_rejected() {
        let config = LabelConfig {
            layout: LabelLayout {
                barcode: Rect::new(40.0, 10.0, 67.5, 10.0),
                ..LabelLayout::LABEL_80X40
            },
            ..LabelConfig::default()
        };
        assert!(matches!(
            render_label("test1234", &config),
            Err(BarcodeError::Config(_))
        ));
    }

    #[test]
    fn test_huge_area_rejected_without_panic() {
        let config = LabelConfig {
            layout: LabelLayout {
                barcode: Rect::new(1e20, 10.0, 67.5, 10.0),
                ..LabelLayout::LABEL_80X40
            },
            ..LabelConfig::default()
        };
        assert!(render_label("test1234", &config).is_err());
    }
}

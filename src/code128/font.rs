//! Glyph mapping for Code 128 barcode fonts.
//!
//! A Code 128 TrueType font draws one symbol per glyph. Value codes have to
//! be shifted into the font's code point layout before the text is handed to
//! a text renderer.
//!
//! ## Layouts
//!
//! | Value | Standard | Contiguous |
//! |-------|----------|------------|
//! | 0-94 | v + 32 (raw ASCII) | v + 105 |
//! | 95-106 | v + 105 (200-211) | v + 105 |
//!
//! With [`FontMapping::Standard`], data characters come out as the ASCII
//! they were typed as, and only START, STOP and high check values land in
//! the upper block. Both layouts agree on START B (209) and STOP (211).

use super::SymbolValue;

/// Offset for value codes below [`HIGH_BLOCK_START`] in the standard layout.
const ASCII_OFFSET: u32 = 32;

/// Offset for the upper block (and every value in the contiguous layout).
const HIGH_OFFSET: u32 = 105;

/// First value code that the standard layout moves to the upper block.
pub const HIGH_BLOCK_START: SymbolValue = 95;

/// How value codes are laid out in the target barcode font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontMapping {
    /// `v + 32` below 95, `v + 105` from 95 up
    #[default]
    Standard,
    /// `v + 105` for every value
    Contiguous,
}

impl FontMapping {
    /// Font code point for a single value code.
    ///
    /// ```
    /// use barcode_printer::code128::font::FontMapping;
    ///
    /// assert_eq!(FontMapping::Standard.glyph(33), 'A');
    /// assert_eq!(FontMapping::Standard.glyph(104), '\u{d1}');
    /// assert_eq!(FontMapping::Contiguous.glyph(0), 'i');
    /// ```
    pub fn glyph(self, value: SymbolValue) -> char {
        let offset = match self {
            Self::Standard if value < HIGH_BLOCK_START => ASCII_OFFSET,
            _ => HIGH_OFFSET,
        };
        // value <= 255, so the sum stays inside Latin-1
        char::from_u32(value as u32 + offset).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Parse a mapping name (CLI args).
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "contiguous" => Ok(Self::Contiguous),
            other => Err(format!(
                "Unknown font mapping '{}'. Use 'standard' or 'contiguous'",
                other
            )),
        }
    }
}

/// Render a whole symbol sequence as text for a Code 128 font.
pub fn to_font_text(symbols: &[SymbolValue], mapping: FontMapping) -> String {
    symbols.iter().map(|&value| mapping.glyph(value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code128::encode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_matches_legacy_output() {
        // Start B (209), raw text, check 'Z' (58 + 32), Stop (211)
        let symbols = encode("test1234").unwrap();
        assert_eq!(
            to_font_text(&symbols, FontMapping::Standard),
            "\u{d1}test1234Z\u{d3}"
        );
    }

    #[test]
    fn test_standard_passes_data_through() {
        let text = "Hello, World!";
        let symbols = encode(text).unwrap();
        let font_text = to_font_text(&symbols, FontMapping::Standard);
        let data: String = font_text.chars().skip(1).take(text.len()).collect();
        assert_eq!(data, text);
    }

    #[test]
    fn test_empty_input_check_glyph() {
        let symbols = encode("").unwrap();
        assert_eq!(to_font_text(&symbols, FontMapping::Standard), "\u{d1}!\u{d3}");
        assert_eq!(
            to_font_text(&symbols, FontMapping::Contiguous),
            "\u{d1}j\u{d3}"
        );
    }

    #[test]
    fn test_mappings_agree_on_high_check_values() {
        // "~" has check value 95, the first value in the upper block
        let symbols = encode("~").unwrap();
        let check = symbols[2];
        assert_eq!(check, 95);
        assert_eq!(FontMapping::Standard.glyph(check), '\u{c8}');
        assert_eq!(FontMapping::Contiguous.glyph(check), '\u{c8}');
    }

    #[test]
    fn test_mappings_diverge_below_upper_block() {
        // "}" has check value 94, the last value below the upper block
        let symbols = encode("}").unwrap();
        let check = symbols[2];
        assert_eq!(check, 94);
        assert_eq!(FontMapping::Standard.glyph(check), '~');
        assert_eq!(FontMapping::Contiguous.glyph(check), '\u{c7}');
    }

    #[test]
    fn test_start_and_stop_glyphs() {
        for mapping in [FontMapping::Standard, FontMapping::Contiguous] {
            assert_eq!(mapping.glyph(104) as u32, 209);
            assert_eq!(mapping.glyph(106) as u32, 211);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(FontMapping::parse("standard"), Ok(FontMapping::Standard));
        assert_eq!(FontMapping::parse("Contiguous"), Ok(FontMapping::Contiguous));
        assert!(FontMapping::parse("wide").is_err());
    }
}

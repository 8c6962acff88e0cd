//! # Code 128 Subset B Encoder
//!
//! Converts printable ASCII text into the sequence of Code 128 symbol values
//! that a barcode font or rasterizer turns into bars.
//!
//! ## Symbol Sequence
//!
//! ```text
//! [START_B, data_1, ..., data_n, CHECKSUM, STOP]
//!    104    c1-32       cn-32    sum%103   106
//! ```
//!
//! Every element is a value code in `0..=106`. Turning value codes into
//! something printable is done by [`font`] (glyph code points for a Code 128
//! font) or [`bars`] (bar/space module widths).
//!
//! ## Checksum
//!
//! The check value is a weighted sum taken modulo 103. The start symbol
//! counts once, and each data value is multiplied by its 1-based position:
//!
//! ```text
//! "A":  104 + 33*1 = 137,  137 mod 103 = 34
//! ```
//!
//! ## Example
//!
//! ```
//! use barcode_printer::code128::{self, START_B, STOP};
//!
//! let symbols = code128::encode("PJJ123C")?;
//! assert_eq!(symbols.first(), Some(&START_B));
//! assert_eq!(symbols[symbols.len() - 2], 55);
//! assert_eq!(symbols.last(), Some(&STOP));
//! # Ok::<(), code128::EncodeError>(())
//! ```

pub mod bars;
pub mod font;

use thiserror::Error;

/// One Code 128 symbol character, identified by its value code (0-106).
pub type SymbolValue = u8;

/// Start Code B: selects character subset B.
pub const START_B: SymbolValue = 104;

/// Stop code, terminates every symbol.
pub const STOP: SymbolValue = 106;

/// Modulus of the check character.
pub const CHECKSUM_MODULUS: u64 = 103;

/// Lowest code point subset B can encode (space).
pub const FIRST_PRINTABLE: char = ' ';

/// Highest code point subset B can encode (tilde).
pub const LAST_PRINTABLE: char = '~';

/// Errors raised while encoding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The character at `index` is outside printable ASCII (32-126).
    #[error("unsupported character {character:?} (U+{:04X}) at position {index}", code_point(.character))]
    UnsupportedCharacter {
        /// The offending character
        character: char,
        /// Character position in the input (not byte offset)
        index: usize,
    },
}

fn code_point(ch: &char) -> u32 {
    *ch as u32
}

/// Map one input character to its subset B value code (`c - 32`).
///
/// `index` is only used to report where a rejected character sits.
///
/// ```
/// use barcode_printer::code128::value_code;
///
/// assert_eq!(value_code(' ', 0), Ok(0));
/// assert_eq!(value_code('A', 0), Ok(33));
/// assert_eq!(value_code('~', 0), Ok(94));
/// assert!(value_code('\n', 0).is_err());
/// ```
#[inline]
pub fn value_code(ch: char, index: usize) -> Result<SymbolValue, EncodeError> {
    if (FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&ch) {
        Ok(ch as u8 - FIRST_PRINTABLE as u8)
    } else {
        Err(EncodeError::UnsupportedCharacter {
            character: ch,
            index,
        })
    }
}

/// Compute the modulo-103 check value for a run of subset B data values.
///
/// The sum starts at [`START_B`], and the n-th data value has weight n.
/// Accumulates in `u64`, so input length is bounded only by memory.
pub fn checksum(data: &[SymbolValue]) -> SymbolValue {
    let sum = data
        .iter()
        .zip(1u64..)
        .fold(START_B as u64, |sum, (&value, weight)| {
            sum + value as u64 * weight
        });

    (sum % CHECKSUM_MODULUS) as SymbolValue
}

/// # Encode Text as Code 128 Subset B
///
/// Returns `[START_B, data..., CHECKSUM, STOP]`, which is always
/// `text.chars().count() + 3` symbols long.
///
/// ## Errors
///
/// Fails on the first character outside printable ASCII, without returning
/// any partial sequence.
///
/// ## Example
///
/// ```
/// use barcode_printer::code128;
///
/// assert_eq!(code128::encode("")?, vec![104, 1, 106]);
/// assert_eq!(code128::encode("A")?, vec![104, 33, 34, 106]);
/// # Ok::<(), code128::EncodeError>(())
/// ```
pub fn encode(text: &str) -> Result<Vec<SymbolValue>, EncodeError> {
    let mut symbols = Vec::with_capacity(text.len() + 3);
    symbols.push(START_B);

    for (index, ch) in text.chars().enumerate() {
        symbols.push(value_code(ch, index)?);
    }

    let check = checksum(&symbols[1..]);
    symbols.push(check);
    symbols.push(STOP);
    Ok(symbols)
}

// ============================================================================
// TESTS
// ============================================================================

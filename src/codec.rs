// 🔢 POSTNET Digit Codec
// Digit ↔ 5-bar pattern table, weighted decode, check-digit arithmetic

use std::fmt;

// ============================================================================
// BAR PATTERNS
// ============================================================================

/// A single POSTNET digit pattern: 5 characters over {'|' full bar, ':' half bar}
pub type BarPattern = &'static str;

/// Full-height bar marking the start and end of every barcode
pub const FRAME_BAR: char = '|';

/// Number of bar characters per digit pattern
pub const PATTERN_LEN: usize = 5;

/// Digit → pattern table, indexed 0-9.
/// Digit 0 shares its pattern with the check value 10 (the "11" row of the
/// weighted scoring table collapses to 0).
const PATTERNS: [BarPattern; 10] = [
    "||:::", // 0 (and check value 10)
    ":::||", // 1
    "::|:|", // 2
    "::||:", // 3
    ":|::|", // 4
    ":|:|:", // 5
    ":||::", // 6
    "|:::|", // 7
    "|::|:", // 8
    "|:|::", // 9
];

// ============================================================================
// CODEC ERRORS
// ============================================================================

/// Domain errors for POSTNET encoding/decoding.
///
/// These replace the original program's magic sentinel strings: callers match
/// on the variant, never on error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Encode was asked for a value outside 0-10, a ZIP contained a
    /// non-digit character, or a bar segment had the wrong shape
    InvalidDigitPattern,
    /// ZIP digit sum plus check digit is not a multiple of 10
    InvalidCheckDigit,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidDigitPattern => write!(f, "invalid digit pattern"),
            CodecError::InvalidCheckDigit => write!(f, "invalid check digit"),
        }
    }
}

impl std::error::Error for CodecError {}

// ============================================================================
// ENCODE / DECODE
// ============================================================================

/// Look up the 5-bar pattern for a digit.
///
/// Accepts 0-9 plus 10 (the uncollapsed check value, which shares digit 0's
/// pattern). Anything else is `InvalidDigitPattern`.
pub fn encode_digit(digit: i32) -> Result<BarPattern, CodecError> {
    match digit {
        0..=9 => Ok(PATTERNS[digit as usize]),
        10 => Ok(PATTERNS[0]),
        _ => Err(CodecError::InvalidDigitPattern),
    }
}

/// Reverse-encode a 5-character bar segment into its digit value.
///
/// The first four positions carry binary weights [7, 4, 2, 1]; a full bar
/// counts as 1, any other character as 0. The fifth position has weight 0.
/// A computed value of 11 (pattern "||:::") is the digit 0 — an explicit
/// special case in the scoring table, not a modulus.
///
/// Garbage patterns still decode to *some* value (possibly > 9);
/// [`crate::barcode::decode_barcode`] rejects anything outside 0-9 before
/// running its checksum.
pub fn decode_digit(pattern: &str) -> Result<u32, CodecError> {
    if pattern.len() != PATTERN_LEN {
        return Err(CodecError::InvalidDigitPattern);
    }

    const WEIGHTS: [u32; 5] = [7, 4, 2, 1, 0];

    let mut value = 0;
    for (weight, bar) in WEIGHTS.iter().zip(pattern.chars()) {
        if bar == FRAME_BAR {
            value += weight;
        }
    }

    // "||:::" scores 11 but means 0
    if value == 11 {
        value = 0;
    }

    Ok(value)
}

/// Check digit for a ZIP whose digits sum to `digit_sum`: the value that
/// makes the full sum (ZIP digits + check digit) a multiple of 10.
pub fn check_digit(digit_sum: u32) -> u32 {
    (10 - digit_sum % 10) % 10
}

// ============================================================================
// TESTS
// ============================================================================

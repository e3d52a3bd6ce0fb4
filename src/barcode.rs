// 📬 Barcode Conversion
// ZIP → 6-segment POSTNET barcode and barcode string → validated ZIP

use crate::codec::{
    check_digit, decode_digit, encode_digit, BarPattern, CodecError, FRAME_BAR, PATTERN_LEN,
};

/// Number of pattern segments in a 5-digit barcode (5 ZIP digits + check digit)
pub const SEGMENTS: usize = 6;

// ============================================================================
// BARCODE VALUE
// ============================================================================

/// A complete POSTNET barcode: the ZIP's digit patterns plus the check-digit
/// pattern, in order. Built once per conversion and never mutated; the frame
/// bars are added at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    segments: [BarPattern; SEGMENTS],
}

impl Barcode {
    /// Encode a 5-digit ZIP string into a barcode.
    ///
    /// Sums the digits, encodes each one, and appends the pattern for
    /// `(10 - sum % 10) % 10`. Any non-digit character in the ZIP is
    /// `InvalidDigitPattern`.
    pub fn from_zip(zip: &str) -> Result<Barcode, CodecError> {
        if zip.len() != SEGMENTS - 1 {
            return Err(CodecError::InvalidDigitPattern);
        }

        let mut segments = [""; SEGMENTS];
        let mut digit_sum = 0;

        for (i, ch) in zip.chars().enumerate() {
            let digit = ch.to_digit(10).ok_or(CodecError::InvalidDigitPattern)?;
            digit_sum += digit;
            segments[i] = encode_digit(digit as i32)?;
        }

        segments[SEGMENTS - 1] = encode_digit(check_digit(digit_sum) as i32)?;

        Ok(Barcode { segments })
    }

    /// The 6 pattern segments, ZIP digits first, check digit last.
    pub fn segments(&self) -> &[BarPattern; SEGMENTS] {
        &self.segments
    }

    /// Human-readable rendering: frame bars and segments separated by tabs.
    ///
    /// Example for ZIP 12345: `|	:::||	::|:|	::||:	:|::|	:|:|:	:|:|:	|`
    pub fn readable(&self) -> String {
        let mut out = format!("{}\t", FRAME_BAR);
        for segment in &self.segments {
            out.push_str(segment);
            out.push('\t');
        }
        out.push(FRAME_BAR);
        out
    }

    /// Postable rendering: the contiguous 32-character bar string as it would
    /// appear printed on mail.
    pub fn postable(&self) -> String {
        let mut out = String::with_capacity(2 + SEGMENTS * PATTERN_LEN);
        out.push(FRAME_BAR);
        for segment in &self.segments {
            out.push_str(segment);
        }
        out.push(FRAME_BAR);
        out
    }
}

// ============================================================================
// BARCODE → ZIP
// ============================================================================

/// Decode a framed barcode string back into its ZIP code.
///
/// Strips the leading/trailing frame bars, splits the body into 5-character
/// segments (all but the last are ZIP digits, the last is the check digit),
/// and validates that the full digit sum is a multiple of 10.
///
/// Returns `InvalidCheckDigit` when the checksum fails — a tagged result, so
/// the lookup layer never inspects error text. A body that is not a non-empty
/// multiple of 5 plus a check segment is `InvalidDigitPattern`, as is any
/// segment decoding to a value outside 0-9 (patterns not in the table).
pub fn decode_barcode(barcode: &str) -> Result<String, CodecError> {
    // frame bars + at least one digit segment + the check segment
    if !barcode.is_ascii() || barcode.len() < 2 + 2 * PATTERN_LEN {
        return Err(CodecError::InvalidDigitPattern);
    }

    let body = &barcode[1..barcode.len() - 1];
    if body.len() % PATTERN_LEN != 0 {
        return Err(CodecError::InvalidDigitPattern);
    }

    let mut zip = String::with_capacity(body.len() / PATTERN_LEN - 1);
    let mut digit_sum = 0;

    let digit_end = body.len() - PATTERN_LEN;
    for start in (0..digit_end).step_by(PATTERN_LEN) {
        let value = decode_digit(&body[start..start + PATTERN_LEN])?;
        // values 10-14 are not in the pattern table; letting them through
        // would let a corrupt barcode satisfy the checksum and produce a
        // "ZIP" longer than its digit count
        if value > 9 {
            return Err(CodecError::InvalidDigitPattern);
        }
        digit_sum += value;
        zip.push_str(&value.to_string());
    }

    let check = decode_digit(&body[digit_end..])?;
    if check > 9 {
        return Err(CodecError::InvalidDigitPattern);
    }

    if (digit_sum + check) % 10 == 0 {
        Ok(zip)
    } else {
        Err(CodecError::InvalidCheckDigit)
    }
}

// ============================================================================
// TESTS
// ============================================================================

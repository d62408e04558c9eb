//! Measured geometry and CSS number parsing.
//!
//! Host measurements arrive as floating point pixel values. Row grouping
//! and height reporting work at a resolution of hundredths of a pixel, so
//! sub-pixel noise below that threshold never splits a row.

use serde::{Deserialize, Serialize};

/// A length in CSS pixels.
pub type Px = f64;

/// Bounding box of a single row item, as reported by the host layout.
///
/// Only the vertical extent matters for row grouping; horizontal position
/// is irrelevant because items on the same visual row share a top offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemRect {
    /// Top offset of the item's border box.
    pub top: Px,
    /// Height of the item's border box.
    pub height: Px,
}

impl ItemRect {
    /// Create a new item rect.
    pub fn new(top: Px, height: Px) -> Self {
        Self { top, height }
    }

    /// Top offset expressed in whole hundredths of a pixel.
    ///
    /// Two items belong to the same row iff their keys are equal.
    pub fn row_key(&self) -> i64 {
        to_hundredths(self.top)
    }
}

/// Round a pixel value to two decimal places.
///
/// Non-finite values pass through unchanged.
pub fn round2(value: Px) -> Px {
    if !value.is_finite() {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Convert a pixel value to an integer count of hundredths.
pub(crate) fn to_hundredths(value: Px) -> i64 {
    // Saturating float-to-int cast; NaN maps to 0.
    (value * 100.0).round() as i64
}

/// Parse the leading floating point number of a CSS value.
///
/// Mirrors the prefix rule browsers use for `parseFloat`: leading
/// whitespace is skipped, then the longest prefix that forms a decimal
/// number is taken and the remainder (units, further list values) is
/// ignored. `"10px"` and `"10px 20px"` both yield `10.0`; `"normal"` and
/// `""` yield `None`.
pub fn parse_css_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Optional exponent, only consumed when followed by digits.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse the leading base-10 integer of an attribute value.
///
/// Follows `parseInt(value, 10)`: whitespace is skipped, an optional sign
/// is accepted, and parsing stops at the first non-digit. `"3rows"` yields
/// `3`, `"2.5"` yields `2`, `"abc"` yields `None`.
pub fn parse_css_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    match s[..end].parse::<i64>() {
        Ok(value) => Some(value),
        // Overflowing digit runs still denote a (huge) number of the given sign.
        Err(_) if s.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

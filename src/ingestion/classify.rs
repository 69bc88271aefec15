//! Per-cell type classification.
//!
//! Classification is strict: a value only counts as numeric if the whole trimmed string is a
//! valid lexeme. Storage (see [`super::store`]) is deliberately more permissive.

use crate::types::ColumnType;

/// Exclusive magnitude bound for [`ColumnType::Int`]. Fixed policy, independent of platform
/// integer widths.
pub const INT_EXCLUSIVE_BOUND: i64 = 32_768;

/// Classifies one raw cell into the most restrictive type that can hold it.
pub fn classify(raw: &str) -> ColumnType {
    let s = raw.trim();
    if s.is_empty() || s == "0" || s == "1" {
        return ColumnType::Bool;
    }
    if !is_float_lexeme(s) {
        return ColumnType::String;
    }
    if !is_integer_lexeme(s) {
        return ColumnType::Double;
    }
    // Too many digits for i64: still an integer, so it lands in the widest integer type.
    let magnitude = s.parse::<i64>().unwrap_or(i64::MAX);
    if magnitude > -INT_EXCLUSIVE_BOUND && magnitude < INT_EXCLUSIVE_BOUND {
        ColumnType::Int
    } else {
        ColumnType::Long
    }
}

/// Floating-point lexeme check.
///
/// Accepts digits, at most one `.`, at most one `e`/`E`, a `-` only at position 0 or right after
/// the exponent marker, and a `+` only right after the exponent marker.
pub fn is_float_lexeme(s: &str) -> bool {
    let mut seen_point = false;
    let mut seen_exponent = false;
    let mut sign_at = 0;
    let mut plus_at = None;

    for (i, b) in s.bytes().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_point => seen_point = true,
            b'e' | b'E' if !seen_exponent => {
                seen_exponent = true;
                sign_at = i + 1;
                plus_at = Some(i + 1);
            }
            b'-' if i == sign_at => {}
            b'+' if plus_at == Some(i) => {}
            _ => return false,
        }
    }
    true
}

/// Plain integer lexeme check: an optional leading `-` followed by one or more digits.
pub fn is_integer_lexeme(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

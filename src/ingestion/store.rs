//! Conversion of raw cells into stored [`Value`]s.
//!
//! Parsing here consumes the longest valid numeric prefix and ignores the rest, so `"1.5e"`
//! in a `Double` column stores `1.5`. Blank cells store the zero value of the column type.

use crate::types::{ColumnType, Row, Value};

/// Parses one raw cell into the column's resolved type.
pub fn parse_value(raw: &str, column_type: ColumnType) -> Value {
    match column_type {
        ColumnType::Bool => Value::Bool(parse_integer_prefix(raw) != 0),
        // Int columns only hold values inside the Int range; the cast cannot lose anything.
        ColumnType::Int => Value::Int(parse_integer_prefix(raw) as i32),
        ColumnType::Long => Value::Long(parse_integer_prefix(raw)),
        ColumnType::Double => Value::Double(parse_float_prefix(raw)),
        ColumnType::String => Value::String(raw.to_owned()),
    }
}

/// Builds one stored row. Missing cells are treated as blank, extra cells are ignored.
pub fn build_row<S: AsRef<str>>(raw: &[S], types: &[ColumnType]) -> Row {
    types
        .iter()
        .enumerate()
        .map(|(i, &t)| parse_value(raw.get(i).map_or("", AsRef::as_ref), t))
        .collect()
}

/// Integer prefix parse: leading whitespace, optional sign, digits. Saturates on overflow and
/// returns 0 when there are no digits.
pub fn parse_integer_prefix(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        acc = match acc.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(d)
            } else {
                v.checked_add(d)
            }
        }) {
            Some(v) => v,
            None if negative => return i64::MIN,
            None => return i64::MAX,
        };
    }
    acc
}

/// Floating-point prefix parse: leading whitespace, optional sign, digits with an optional
/// fraction, then an optional exponent that is only consumed if it has digits. Returns 0.0 when
/// there is no mantissa digit.
pub fn parse_float_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let end = float_prefix_len(s.as_bytes());
    if end == 0 {
        return 0.0;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

fn float_prefix_len(b: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(b.first(), Some(b'-' | b'+')) {
        i = 1;
    }
    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if b.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        i = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'-' | b'+')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}

//! Presentation helpers for monetary amounts and ratios.
//!
//! Two percentage conventions coexist on purpose: the margin calculations return
//! percent-scale strings already, while [`format_percentage`] expects a fraction.

/// Symbol used by [`format_currency`].
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

const GROUPING_SEPARATOR: char = ',';

/// Magnitude from which fixed notation gives way to exponent notation.
const FIXED_NOTATION_LIMIT: f64 = 1e21;

/// Renders `value` with exactly `digits` decimal places.
///
/// Nearest decimal on the exact binary value; an exact midpoint rounds away
/// from zero. The sign is written only for values strictly below zero, so
/// `-0.0` renders as `0.0` while `-0.04` renders as `-0.0`. Magnitudes of
/// `1e21` and above fall back to exponent notation (`1e+21`).
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= FIXED_NOTATION_LIMIT {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }
    let body = if is_midpoint(magnitude, digits) {
        round_midpoint_up(&format!("{:.*}", digits + 1, magnitude))
    } else {
        format!("{:.*}", digits, magnitude)
    };
    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// A value sits exactly halfway between two `digits`-place decimals iff it
/// equals `odd / 2^(digits + 1)`; scaling by a power of two is exact.
fn is_midpoint(magnitude: f64, digits: usize) -> bool {
    let Ok(exponent) = i32::try_from(digits + 1) else {
        return false;
    };
    let scaled = magnitude * 2f64.powi(exponent);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

/// Drops the trailing `5` of an exact midpoint and bumps the last kept digit.
fn round_midpoint_up(exact: &str) -> String {
    let kept = exact[..exact.len() - 1].trim_end_matches('.');
    let mut chars: Vec<char> = kept.chars().collect();
    for idx in (0..chars.len()).rev() {
        match chars[idx] {
            '.' => continue,
            '9' => chars[idx] = '0',
            digit => {
                chars[idx] = char::from(digit as u8 + 1);
                return chars.into_iter().collect();
            }
        }
    }
    chars.insert(0, '1');
    chars.into_iter().collect()
}

/// Rounds to a whole amount and renders it as `$1,234,567`.
pub fn format_currency(value: f64) -> String {
    format_currency_with_symbol(value, DEFAULT_CURRENCY_SYMBOL)
}

/// Same as [`format_currency`] with a caller supplied symbol.
pub fn format_currency_with_symbol(value: f64, symbol: &str) -> String {
    format!("{}{}", symbol, format_whole_number(value))
}

/// Rounds half away from zero and inserts thousands separators.
pub fn format_whole_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // adding 0.0 folds -0 into 0
    let rounded = value.round() + 0.0;
    let mut body = format!("{:.0}", rounded);
    insert_grouping(&mut body, GROUPING_SEPARATOR);
    body
}

/// Treats `value` as a fraction: `0.456` renders as `45.6%`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", to_fixed(value * 100.0, 1))
}

fn insert_grouping(int_part: &mut String, separator: char) {
    match int_part.strip_prefix('-') {
        Some(digits) => *int_part = format!("-{}", group_digits(digits, separator)),
        None => *int_part = group_digits(int_part, separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

//! Raw value → display text.
//!
//! Formatting runs both on the initial model value and on every qualifying
//! keystroke, so it has to cope with anything a user can leave in the field
//! mid-edit. Digits are read as a cents amount: the last two digits of the run
//! always land after the decimal point, which is what lets the field behave
//! like a cash register while typing (`1` → `0.01`, `12` → `0.12`,
//! `123` → `1.23`).

use shared::{FormatOptions, FormatResult};

use super::{
    has_leading_sign, CURRENCY_SYMBOL, DECIMAL_POINT, FRACTION_DIGITS, GROUP_SEPARATOR, MASK_CHAR,
};

/// Format a raw value for an editable field.
pub fn format(raw: &str, pad_two_decimals: bool) -> FormatResult {
    format_with(
        raw,
        FormatOptions {
            pad_two_decimals,
            currency_symbol: false,
        },
    )
}

/// Format a raw value with explicit options (currency symbol for view-only
/// rendering).
pub fn format_with(raw: &str, options: FormatOptions) -> FormatResult {
    if raw.is_empty() {
        return FormatResult::empty();
    }

    // Masked placeholders skip sign and grouping entirely
    if is_masked(raw) {
        return FormatResult::masked(raw);
    }

    let is_negative = has_leading_sign(raw);
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        // Keep a lone sign so a negative amount can be typed from scratch
        let mut text = String::new();
        if is_negative {
            if options.currency_symbol {
                text.push(CURRENCY_SYMBOL);
            }
            text.push('-');
        }
        return FormatResult {
            text,
            is_negative,
            is_masked: false,
        };
    }

    let (integer, fraction) = place_decimal_point(digits.trim_start_matches('0'));
    let fraction = fit_fraction(&fraction, options.pad_two_decimals);

    let mut text = String::with_capacity(integer.len() + integer.len() / 3 + fraction.len() + 3);
    if options.currency_symbol {
        text.push(CURRENCY_SYMBOL);
    }
    if is_negative {
        text.push('-');
    }
    text.push_str(&group_thousands(&integer));
    if !fraction.is_empty() {
        text.push(DECIMAL_POINT);
        text.push_str(&fraction);
    }

    FormatResult {
        text,
        is_negative,
        is_masked: false,
    }
}

/// Any `*` marks the value as a redacted placeholder (`"****"`, `"***.**"`).
pub fn is_masked(raw: &str) -> bool {
    raw.contains(MASK_CHAR)
}

/// Split a digit run into integer and fraction parts, treating the last two
/// digits as cents. Short runs are padded on the left so the integer part is
/// never empty: `""` → `("0", "00")`, `"5"` → `("0", "05")`.
fn place_decimal_point(digits: &str) -> (String, String) {
    let padded = format!("{:0>width$}", digits, width = FRACTION_DIGITS + 1);
    let split_at = padded.len() - FRACTION_DIGITS;
    let (integer, fraction) = padded.split_at(split_at);
    (integer.to_string(), fraction.to_string())
}

/// Insert a group separator every three digits from the right.
fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Truncate the fraction to two digits, optionally padding a single digit.
fn fit_fraction(fraction: &str, pad_two_decimals: bool) -> String {
    let mut fitted: String = fraction
        .chars()
        .filter(char::is_ascii_digit)
        .take(FRACTION_DIGITS)
        .collect();
    if pad_two_decimals && fitted.len() == 1 {
        fitted.push('0');
    }
    fitted
}

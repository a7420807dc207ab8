//! Display text → model value.
//!
//! The model value keeps only the significant digits the user typed plus an
//! optional leading minus sign. Separators, the currency symbol, the decimal
//! point and leading zeros are dropped: the formatter reads the last two digits of a run as cents, so
//! `"1,234.56"` and `"123456"` describe the same amount.

use shared::EMPTY_MODEL_VALUE;

use super::has_leading_sign;

/// Convert edited display text into the canonical model string.
///
/// An empty field becomes `"0.00"` so that clearing the input zeroes the
/// model instead of leaving it unset.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return EMPTY_MODEL_VALUE.to_string();
    }

    let mut model = String::with_capacity(raw.len());
    if has_leading_sign(raw) {
        model.push('-');
    }

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() && !digits.is_empty() {
        model.push('0');
    } else {
        model.push_str(significant);
    }
    model
}

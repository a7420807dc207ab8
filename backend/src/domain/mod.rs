//! # Domain Module
//!
//! Pure currency-mask transforms. Nothing in here performs I/O, holds state
//! between calls, or fails: every function is total over its string input so
//! that half-typed values can always be rendered.
//!
//! ## Module Organization
//!
//! - **normalizer**: display text → model value
//! - **formatter**: model or display text → grouped two-decimal display text
//! - **classifier**: negative/positive/neutral classification and style hints
//! - **keystroke**: which key releases should trigger a re-format

pub mod classifier;
pub mod formatter;
pub mod keystroke;
pub mod normalizer;

pub use classifier::*;
pub use formatter::*;
pub use keystroke::*;
pub use normalizer::*;

/// Currency symbol prefixed for view-only rendering
pub const CURRENCY_SYMBOL: char = '$';

/// Placeholder character used for redacted amounts
pub const MASK_CHAR: char = '*';

pub const DECIMAL_POINT: char = '.';

pub const GROUP_SEPARATOR: char = ',';

/// Digits to the right of the decimal point
pub const FRACTION_DIGITS: usize = 2;

/// True when a minus sign appears before the first digit. Currency symbols,
/// codes and spacing in front of the sign (`"$-1.00"`, `"USD -12"`) are
/// skipped; a `-` after the first digit is not a sign.
pub(crate) fn has_leading_sign(raw: &str) -> bool {
    raw.chars()
        .take_while(|ch| !ch.is_ascii_digit())
        .any(|ch| ch == '-')
}

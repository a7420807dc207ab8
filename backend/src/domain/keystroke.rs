//! Which key releases plausibly changed the numeric content of the field.
//!
//! Navigation, modifier and function keys are ignored so the caret is not
//! disturbed; everything that can insert or delete text triggers a re-format.

use std::ops::RangeInclusive;

const BACKSPACE: u32 = 8;
const SPACE: u32 = 32;

const TEXT_INPUT_RANGES: [RangeInclusive<u32>; 5] = [
    48..=57,   // digits
    65..=90,   // letters
    96..=111,  // numpad
    186..=192, // ; = , - . / `
    219..=222, // [ \ ] '
];

/// True when releasing `key_code` should re-run the formatter.
pub fn is_text_input_key(key_code: u32) -> bool {
    key_code == BACKSPACE
        || key_code == SPACE
        || TEXT_INPUT_RANGES
            .iter()
            .any(|range| range.contains(&key_code))
}

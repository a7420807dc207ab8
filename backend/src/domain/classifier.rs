//! Negative/positive classification of a formatted value, plus the style
//! hints the UI layer attaches for it.

use shared::{DisplayClassification, FormatResult};

/// Classify a value for coloring. Without coloring everything is neutral.
pub fn classify(is_negative: bool, color_enabled: bool) -> DisplayClassification {
    match (color_enabled, is_negative) {
        (false, _) => DisplayClassification::Neutral,
        (true, true) => DisplayClassification::Negative,
        (true, false) => DisplayClassification::Positive,
    }
}

/// CSS class for the view-only badge. Masked values get no sign styling.
pub fn badge_class(result: &FormatResult) -> &'static str {
    if result.is_masked {
        ""
    } else if result.is_negative {
        "badge-money-negative"
    } else {
        "badge-money-positive"
    }
}

/// Layout class for the input element
pub fn input_layout_class(inline: bool) -> &'static str {
    if inline {
        "money-input pull-left"
    } else {
        "form-control"
    }
}

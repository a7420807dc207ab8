use serde::{Deserialize, Serialize};
use std::fmt;

/// Model value written back when the display field is cleared
pub const EMPTY_MODEL_VALUE: &str = "0.00";

/// Quiet period before a display edit is committed to the model
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Full output of formatting a raw value for display
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatResult {
    /// Grouped two-decimal display text, a masked placeholder, or empty
    pub text: String,
    /// True when the raw input carried a leading minus sign
    pub is_negative: bool,
    /// True when the raw input was a `*` placeholder passed through untouched
    pub is_masked: bool,
}

impl FormatResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn masked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_negative: false,
            is_masked: true,
        }
    }
}

/// Display classification consumed by the UI layer to pick styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayClassification {
    Negative,
    Positive,
    Neutral,
}

impl DisplayClassification {
    /// CSS class for the editable input
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayClassification::Negative => "text-danger",
            DisplayClassification::Positive => "text-success",
            DisplayClassification::Neutral => "",
        }
    }
}

impl fmt::Display for DisplayClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayClassification::Negative => write!(f, "negative"),
            DisplayClassification::Positive => write!(f, "positive"),
            DisplayClassification::Neutral => write!(f, "neutral"),
        }
    }
}

/// Per-call formatting switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Right-pad a single fraction digit with `0`
    pub pad_two_decimals: bool,
    /// Prefix the `$` symbol (view-only rendering)
    pub currency_symbol: bool,
}

impl FormatOptions {
    pub fn view_only() -> Self {
        Self {
            pad_two_decimals: false,
            currency_symbol: true,
        }
    }
}

/// Options recognized by a currency input binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaskOptions {
    /// Render as a non-editable badge with the currency symbol prefixed
    pub disabled: bool,
    /// Layout only: place the input inline instead of as a block
    pub inline: bool,
    /// Presence validation flag, passed through to the UI
    pub required: bool,
    /// Enable negative/positive classification of the value
    pub colored_money_val: bool,
    /// Pass-through trim flag for the UI field
    pub trim: bool,
    /// Debounce quiet period for model writes, in milliseconds
    pub debounce_ms: u64,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            disabled: false,
            inline: false,
            required: false,
            colored_money_val: false,
            trim: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Events the UI collaborator sends into the binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaskEvent {
    /// The bound model holds a value (fired until the first usable one)
    ModelAvailable { value: String },
    /// A key was released in the display field
    KeyUp { key_code: u32, display: String },
    /// The display text changed and should eventually reach the model
    DisplayEdited { text: String },
}

/// Effects the binding asks the UI collaborator to carry out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaskEffect {
    /// Overwrite the display field
    SetDisplay {
        text: String,
        classification: DisplayClassification,
        css_class: String,
        /// Present only for view-only (disabled) bindings
        badge_class: Option<String>,
        layout_class: String,
    },
    /// Re-dispatch an input-changed notification for the field
    DisplayChanged { text: String },
    /// Hand the display text to the debounced model writer
    ScheduleModelWrite { text: String },
}

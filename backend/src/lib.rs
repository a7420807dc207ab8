//! Currency input masking.
//!
//! [`domain`] holds the pure transforms (format, normalize, classify);
//! [`binding`] drives them from UI events and debounces model writes;
//! [`config`] loads binding options.

pub mod binding;
pub mod config;
pub mod domain;

pub use binding::{BindingError, DebouncedModelWriter, InputBinding, MaskSession};
pub use config::{ConfigError, MaskOptionsExt};
pub use domain::{classify, format, format_with, is_masked, is_text_input_key, normalize};

use shared::{FormatOptions, MaskEffect, MaskEvent, MaskOptions};
use tracing::debug;

use crate::domain::{
    badge_class, classify, format_with, input_layout_class, is_text_input_key,
};

/// Model values that never count as "available"
const UNSET_MODEL_VALUES: [&str; 2] = ["", "undefined"];

/// State machine for one currency input field.
///
/// The binding owns no UI: it turns events into effects. The initial model
/// value is formatted once, then the binding only reacts to key releases and
/// display edits.
#[derive(Debug, Clone)]
pub struct InputBinding {
    options: MaskOptions,
    awaiting_model: bool,
    display: String,
}

impl InputBinding {
    pub fn new(options: MaskOptions) -> Self {
        Self {
            options,
            awaiting_model: true,
            display: String::new(),
        }
    }

    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    /// Display text as last rendered by the binding
    pub fn display(&self) -> &str {
        &self.display
    }

    /// True until the first usable model value has been rendered
    pub fn is_awaiting_model(&self) -> bool {
        self.awaiting_model
    }

    pub fn handle(&mut self, event: MaskEvent) -> Vec<MaskEffect> {
        match event {
            MaskEvent::ModelAvailable { value } => self.on_model_available(&value),
            MaskEvent::KeyUp { key_code, display } => self.on_key_up(key_code, &display),
            MaskEvent::DisplayEdited { text } => self.on_display_edited(text),
        }
    }

    fn on_model_available(&mut self, value: &str) -> Vec<MaskEffect> {
        if !self.awaiting_model {
            debug!("Initial display already set, ignoring model value");
            return Vec::new();
        }
        if UNSET_MODEL_VALUES.contains(&value) {
            debug!("Model value {:?} not usable yet", value);
            return Vec::new();
        }

        self.awaiting_model = false;
        vec![self.render(value)]
    }

    fn on_key_up(&mut self, key_code: u32, display: &str) -> Vec<MaskEffect> {
        if !is_text_input_key(key_code) {
            debug!("Key {} does not change content", key_code);
            return Vec::new();
        }
        if display.is_empty() {
            self.display.clear();
            return Vec::new();
        }

        let rendered = self.render(display);
        vec![
            rendered,
            MaskEffect::DisplayChanged {
                text: self.display.clone(),
            },
        ]
    }

    fn on_display_edited(&mut self, text: String) -> Vec<MaskEffect> {
        self.display = text.clone();
        vec![MaskEffect::ScheduleModelWrite { text }]
    }

    fn render(&mut self, raw: &str) -> MaskEffect {
        let options = FormatOptions {
            pad_two_decimals: false,
            currency_symbol: self.options.disabled,
        };
        let result = format_with(raw, options);
        let classification = classify(result.is_negative, self.options.colored_money_val);
        let badge = self
            .options
            .disabled
            .then(|| badge_class(&result).to_string());

        debug!("Rendered {:?} as {:?} ({})", raw, result.text, classification);
        self.display = result.text.clone();

        MaskEffect::SetDisplay {
            text: result.text,
            classification,
            css_class: classification.css_class().to_string(),
            badge_class: badge,
            layout_class: input_layout_class(self.options.inline).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DisplayClassification;

    fn model_available(value: &str) -> MaskEvent {
        MaskEvent::ModelAvailable {
            value: value.to_string(),
        }
    }

    fn key_up(key_code: u32, display: &str) -> MaskEvent {
        MaskEvent::KeyUp {
            key_code,
            display: display.to_string(),
        }
    }

    fn displayed_text(effects: &[MaskEffect]) -> Option<&str> {
        effects.iter().find_map(|effect| match effect {
            MaskEffect::SetDisplay { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_initial_model_value_is_formatted_once() {
        let mut binding = InputBinding::new(MaskOptions::default());

        let effects = binding.handle(model_available("1234567"));
        assert_eq!(displayed_text(&effects), Some("12,345.67"));
        assert!(!binding.is_awaiting_model());

        // Later model changes no longer overwrite the display
        assert!(binding.handle(model_available("999")).is_empty());
        assert_eq!(binding.display(), "12,345.67");
    }

    #[test]
    fn test_unset_model_values_keep_waiting() {
        let mut binding = InputBinding::new(MaskOptions::default());

        assert!(binding.handle(model_available("")).is_empty());
        assert!(binding.handle(model_available("undefined")).is_empty());
        assert!(binding.is_awaiting_model());

        let effects = binding.handle(model_available("500"));
        assert_eq!(displayed_text(&effects), Some("5.00"));
    }

    #[test]
    fn test_qualifying_keystroke_reformats_and_redispatches() {
        let mut binding = InputBinding::new(MaskOptions::default());

        let effects = binding.handle(key_up(52, "12.344"));
        assert_eq!(effects.len(), 2);
        assert_eq!(displayed_text(&effects), Some("123.44"));
        assert_eq!(
            effects[1],
            MaskEffect::DisplayChanged {
                text: "123.44".to_string()
            }
        );
    }

    #[test]
    fn test_non_text_keys_are_ignored() {
        let mut binding = InputBinding::new(MaskOptions::default());

        // left arrow, shift
        assert!(binding.handle(key_up(37, "12.344")).is_empty());
        assert!(binding.handle(key_up(16, "12.344")).is_empty());
    }

    #[test]
    fn test_empty_display_is_not_reformatted() {
        let mut binding = InputBinding::new(MaskOptions::default());

        assert!(binding.handle(key_up(8, "")).is_empty());
        assert_eq!(binding.display(), "");
    }

    #[test]
    fn test_display_edit_schedules_model_write() {
        let mut binding = InputBinding::new(MaskOptions::default());

        let effects = binding.handle(MaskEvent::DisplayEdited {
            text: "1,234.56".to_string(),
        });
        assert_eq!(
            effects,
            vec![MaskEffect::ScheduleModelWrite {
                text: "1,234.56".to_string()
            }]
        );
    }

    #[test]
    fn test_colored_values_are_classified() {
        let options = MaskOptions {
            colored_money_val: true,
            ..MaskOptions::default()
        };
        let mut binding = InputBinding::new(options);

        let effects = binding.handle(key_up(189, "-5000"));
        match &effects[0] {
            MaskEffect::SetDisplay {
                text,
                classification,
                css_class,
                badge_class,
                ..
            } => {
                assert_eq!(text, "-50.00");
                assert_eq!(*classification, DisplayClassification::Negative);
                assert_eq!(css_class, "text-danger");
                assert_eq!(*badge_class, None);
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_uncolored_values_are_neutral() {
        let mut binding = InputBinding::new(MaskOptions::default());

        match &binding.handle(model_available("-5000"))[0] {
            MaskEffect::SetDisplay {
                classification,
                css_class,
                ..
            } => {
                assert_eq!(*classification, DisplayClassification::Neutral);
                assert_eq!(css_class, "");
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_disabled_binding_renders_view_only_badge() {
        let options = MaskOptions {
            disabled: true,
            inline: true,
            ..MaskOptions::default()
        };
        let mut binding = InputBinding::new(options);

        match &binding.handle(model_available("-123456"))[0] {
            MaskEffect::SetDisplay {
                text,
                badge_class,
                layout_class,
                ..
            } => {
                assert_eq!(text, "$-1,234.56");
                assert_eq!(badge_class.as_deref(), Some("badge-money-negative"));
                assert_eq!(layout_class, "money-input pull-left");
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_masked_model_value_passes_through() {
        let options = MaskOptions {
            disabled: true,
            colored_money_val: true,
            ..MaskOptions::default()
        };
        let mut binding = InputBinding::new(options);

        match &binding.handle(model_available("***.**"))[0] {
            MaskEffect::SetDisplay {
                text,
                classification,
                badge_class,
                ..
            } => {
                assert_eq!(text, "***.**");
                assert_eq!(*classification, DisplayClassification::Positive);
                assert_eq!(badge_class.as_deref(), Some(""));
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }
}

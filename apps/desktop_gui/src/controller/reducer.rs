//! Applies UI events to the converter and re-syncs the input drafts.

use converter::NumberBaseConverter;

use crate::controller::events::UiEvent;

/// Text currently shown in the two input widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDrafts {
    pub decimal: String,
    pub binary: String,
}

#[derive(Debug, Default)]
pub struct ScreenState {
    pub converter: NumberBaseConverter,
    pub drafts: InputDrafts,
}

impl ScreenState {
    pub fn apply(&mut self, event: UiEvent) {
        match event.into_edit() {
            Some(edit) => {
                tracing::debug!(base = %edit.base(), len = edit.text().len(), "field edited");
                self.converter.apply(&edit);
            }
            None => self.converter.reset(),
        }

        self.drafts.decimal = self.converter.decimal_text().to_string();
        self.drafts.binary = self.converter.binary_text().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_edit_rewrites_both_drafts() {
        let mut state = ScreenState::default();
        state.drafts.decimal = "1o".to_string();
        state.apply(UiEvent::DecimalChanged("1o".to_string()));

        assert_eq!(state.drafts.decimal, "1");
        assert_eq!(state.drafts.binary, "00000001");
        assert_eq!(state.converter.current_bits().as_slice().last(), Some(&1));
    }

    #[test]
    fn binary_edit_keeps_typed_text_and_fills_decimal() {
        let mut state = ScreenState::default();
        state.apply(UiEvent::BinaryChanged("0101".to_string()));

        assert_eq!(state.drafts.binary, "0101");
        assert_eq!(state.drafts.decimal, "5");
    }

    #[test]
    fn zero_clears_the_other_field() {
        let mut state = ScreenState::default();
        state.apply(UiEvent::DecimalChanged("12".to_string()));
        state.apply(UiEvent::DecimalChanged("0".to_string()));

        assert_eq!(state.drafts.decimal, "0");
        assert!(state.drafts.binary.is_empty());
        assert_eq!(state.converter.current_bits().as_slice(), &[0; shared::MIN_SQUARES]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = ScreenState::default();
        state.apply(UiEvent::BinaryChanged("111111111".to_string()));
        state.apply(UiEvent::Cleared);

        assert_eq!(state.drafts, InputDrafts::default());
        assert_eq!(state.converter.current_bits().len(), shared::MIN_SQUARES);
    }
}

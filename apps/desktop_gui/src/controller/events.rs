//! Events emitted by the converter screen.

use converter::Edit;

/// Each change event carries the full text of its field, not a delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DecimalChanged(String),
    BinaryChanged(String),
    Cleared,
}

impl UiEvent {
    pub fn into_edit(self) -> Option<Edit> {
        match self {
            UiEvent::DecimalChanged(text) => Some(Edit::Decimal(text)),
            UiEvent::BinaryChanged(text) => Some(Edit::Binary(text)),
            UiEvent::Cleared => None,
        }
    }
}

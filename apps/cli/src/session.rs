//! One converter instance driven by edits from the command line.

use converter::{ConversionSnapshot, Edit, NumberBaseConverter};
use shared::{BinaryText, DecimalText, DomainError};

#[derive(Debug, Default)]
pub struct Session {
    converter: NumberBaseConverter,
    strict: bool,
}

impl Session {
    pub fn new(strict: bool) -> Self {
        Self {
            converter: NumberBaseConverter::new(),
            strict,
        }
    }

    /// In strict mode a rejected edit leaves the current state untouched.
    pub fn submit(&mut self, edit: &Edit) -> Result<&ConversionSnapshot, DomainError> {
        if self.strict {
            check_digits(edit)?;
        }
        self.converter.apply(edit);
        Ok(self.converter.snapshot())
    }

    pub fn snapshot(&self) -> &ConversionSnapshot {
        self.converter.snapshot()
    }
}

fn check_digits(edit: &Edit) -> Result<(), DomainError> {
    match edit {
        Edit::Decimal(text) => DecimalText::new(text.as_str()).map(drop),
        Edit::Binary(text) => BinaryText::new(text.as_str()).map(drop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_session_sanitizes() {
        let mut session = Session::new(false);
        let snapshot = session
            .submit(&Edit::Decimal("1,024".into()))
            .expect("lenient");
        assert_eq!(snapshot.decimal.as_str(), "1024");
        assert_eq!(snapshot.bits.len(), 11);
    }

    #[test]
    fn strict_session_rejects_and_keeps_state() {
        let mut session = Session::new(true);
        session.submit(&Edit::Binary("101".into())).expect("valid");

        let err = session
            .submit(&Edit::Binary("10a".into()))
            .expect_err("letter rejected");
        assert!(err.to_string().contains("binary digit"));
        assert_eq!(session.snapshot().decimal.as_str(), "5");
    }
}

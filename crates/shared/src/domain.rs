use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Minimum number of cells in the bit table.
pub const MIN_SQUARES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    Decimal,
    Binary,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Decimal => 10,
            Base::Binary => 2,
        }
    }

    pub fn allows(self, ch: char) -> bool {
        match self {
            Base::Decimal => ch.is_ascii_digit(),
            Base::Binary => ch == '0' || ch == '1',
        }
    }

    /// Drops every character outside this base's digit set.
    pub fn sanitize(self, raw: &str) -> String {
        raw.chars().filter(|ch| self.allows(*ch)).collect()
    }

    fn validate(self, raw: &str) -> Result<(), DomainError> {
        match raw.chars().enumerate().find(|(_, ch)| !self.allows(*ch)) {
            Some((position, ch)) => Err(DomainError::InvalidDigit {
                base: self,
                ch,
                position,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base::Decimal => f.write_str("decimal"),
            Base::Binary => f.write_str("binary"),
        }
    }
}

macro_rules! digit_text_newtype {
    ($name:ident, $base:expr) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const BASE: Base = $base;

            /// Accepts `raw` only if every character is a digit of this base.
            pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
                let raw = raw.into();
                Self::BASE.validate(&raw)?;
                Ok(Self(raw))
            }

            pub fn sanitized(raw: &str) -> Self {
                Self(Self::BASE.sanitize(raw))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

digit_text_newtype!(DecimalText, Base::Decimal);
digit_text_newtype!(BinaryText, Base::Binary);

/// Bit cells, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitSequence(Vec<u8>);

impl BitSequence {
    pub fn zeros(width: usize) -> Self {
        Self(vec![0; width])
    }

    /// Left-pads `digits` with zero bits up to `width` cells. Never truncates.
    pub fn padded(digits: &BinaryText, width: usize) -> Self {
        let padding = width.saturating_sub(digits.len());
        let mut bits = Vec::with_capacity(padding + digits.len());
        bits.resize(padding, 0);
        bits.extend(digits.as_str().bytes().map(|b| b - b'0'));
        Self(bits)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exponent shown in the header cell above `index`.
    pub fn exponent_at(&self, index: usize) -> Option<usize> {
        (index < self.0.len()).then(|| self.0.len() - 1 - index)
    }
}

impl Default for BitSequence {
    fn default() -> Self {
        Self::zeros(MIN_SQUARES)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_only_base_digits() {
        assert_eq!(Base::Decimal.sanitize("1a2b3"), "123");
        assert_eq!(Base::Binary.sanitize("10x2 01"), "1001");
        assert_eq!(Base::Decimal.sanitize("١٢٣"), "");
    }

    #[test]
    fn strict_constructor_reports_first_offending_character() {
        let err = BinaryText::new("1012").expect_err("2 is not a bit");
        assert_eq!(
            err,
            DomainError::InvalidDigit {
                base: Base::Binary,
                ch: '2',
                position: 3,
            }
        );
        assert!(DecimalText::new("").expect("empty is allowed").is_empty());
    }

    #[test]
    fn padded_bits_never_truncate() {
        let digits = BinaryText::new("1010").expect("binary");
        assert_eq!(
            BitSequence::padded(&digits, MIN_SQUARES).as_slice(),
            &[0, 0, 0, 0, 1, 0, 1, 0]
        );
        let wide = BinaryText::new("1111111111").expect("binary");
        assert_eq!(BitSequence::padded(&wide, MIN_SQUARES).len(), 10);
    }

    #[test]
    fn default_bits_are_eight_zeros() {
        let bits = BitSequence::default();
        assert_eq!(bits.as_slice(), &[0; MIN_SQUARES]);
        assert_eq!(bits.exponent_at(0), Some(7));
        assert_eq!(bits.exponent_at(7), Some(0));
        assert_eq!(bits.exponent_at(8), None);
    }

    #[test]
    fn newtypes_serialize_as_plain_values() {
        let text = DecimalText::new("42").expect("decimal");
        assert_eq!(serde_json::to_string(&text).expect("json"), "\"42\"");
        let bits = BitSequence::zeros(2);
        assert_eq!(serde_json::to_string(&bits).expect("json"), "[0,0]");
        assert_eq!(serde_json::to_string(&Base::Binary).expect("json"), "\"binary\"");
        assert!(serde_json::from_str::<BinaryText>("\"102\"").is_err());
    }
}

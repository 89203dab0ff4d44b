//! Keeps a number's decimal text, binary text and bit table consistent.
//!
//! Every edit recomputes a whole [`ConversionSnapshot`] from the raw text of the
//! edited field. Values are arbitrary precision, so any digit string converts
//! exactly.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::Serialize;
use shared::domain::{Base, BinaryText, BitSequence, DecimalText, MIN_SQUARES};
use tracing::{debug, trace};

pub mod table;

pub use table::render_table;

/// Full text of one input field after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Decimal(String),
    Binary(String),
}

impl Edit {
    pub fn base(&self) -> Base {
        match self {
            Edit::Decimal(_) => Base::Decimal,
            Edit::Binary(_) => Base::Binary,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Edit::Decimal(text) | Edit::Binary(text) => text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSnapshot {
    pub decimal: DecimalText,
    pub binary: BinaryText,
    pub bits: BitSequence,
}

impl ConversionSnapshot {
    pub fn from_decimal(raw: &str) -> Self {
        let decimal = DecimalText::sanitized(raw);
        let Some(value) = parse_positive(decimal.as_str(), Base::Decimal) else {
            trace!(input_len = decimal.len(), "decimal edit resets bit table");
            return Self {
                decimal,
                ..Self::default()
            };
        };

        let width = display_width(decimal.len());
        let digits = value.to_str_radix(2);
        let binary = BinaryText::sanitized(&format!("{digits:0>width$}"));
        let bits = BitSequence::padded(&binary, width);
        debug!(
            base = %Base::Decimal,
            input_len = decimal.len(),
            width = bits.len(),
            "converted decimal edit"
        );

        Self {
            decimal,
            binary,
            bits,
        }
    }

    /// Bits come from the sanitized input itself, so leading zeros typed by
    /// the user stay visible in the table.
    pub fn from_binary(raw: &str) -> Self {
        let binary = BinaryText::sanitized(raw);
        let Some(value) = parse_positive(binary.as_str(), Base::Binary) else {
            trace!(input_len = binary.len(), "binary edit resets bit table");
            return Self {
                binary,
                ..Self::default()
            };
        };

        let decimal = DecimalText::sanitized(&value.to_str_radix(10));
        let bits = BitSequence::padded(&binary, display_width(binary.len()));
        debug!(
            base = %Base::Binary,
            input_len = binary.len(),
            width = bits.len(),
            "converted binary edit"
        );

        Self {
            decimal,
            binary,
            bits,
        }
    }

    pub fn from_edit(edit: &Edit) -> Self {
        match edit {
            Edit::Decimal(text) => Self::from_decimal(text),
            Edit::Binary(text) => Self::from_binary(text),
        }
    }

    pub fn value(&self) -> BigUint {
        bits_value(&self.bits)
    }

    pub fn report(&self) -> ConversionReport {
        ConversionReport {
            value: self.value().to_string(),
            place_values: place_values(&self.bits)
                .iter()
                .map(ToString::to_string)
                .collect(),
            snapshot: self.clone(),
        }
    }
}

/// Snapshot plus the derived numbers a display needs, with big values as
/// decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    #[serde(flatten)]
    pub snapshot: ConversionSnapshot,
    pub value: String,
    pub place_values: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NumberBaseConverter {
    state: ConversionSnapshot,
}

impl NumberBaseConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_from_decimal(&mut self, raw: &str) {
        self.state = ConversionSnapshot::from_decimal(raw);
    }

    pub fn set_from_binary(&mut self, raw: &str) {
        self.state = ConversionSnapshot::from_binary(raw);
    }

    pub fn apply(&mut self, edit: &Edit) {
        self.state = ConversionSnapshot::from_edit(edit);
    }

    pub fn reset(&mut self) {
        self.state = ConversionSnapshot::default();
    }

    pub fn current_bits(&self) -> &BitSequence {
        &self.state.bits
    }

    pub fn decimal_text(&self) -> &DecimalText {
        &self.state.decimal
    }

    pub fn binary_text(&self) -> &BinaryText {
        &self.state.binary
    }

    pub fn snapshot(&self) -> &ConversionSnapshot {
        &self.state
    }

    pub fn value(&self) -> BigUint {
        self.state.value()
    }

    pub fn place_values(&self) -> Vec<BigUint> {
        place_values(&self.state.bits)
    }
}

/// Header values for each cell: `2^(len - 1 - index)`.
pub fn place_values(bits: &BitSequence) -> Vec<BigUint> {
    (0..bits.len())
        .filter_map(|index| bits.exponent_at(index))
        .map(|exponent| BigUint::one() << exponent)
        .collect()
}

pub fn bits_value(bits: &BitSequence) -> BigUint {
    bits.as_slice()
        .iter()
        .fold(BigUint::zero(), |acc, bit| (acc << 1u32) + BigUint::from(*bit))
}

fn display_width(input_len: usize) -> usize {
    MIN_SQUARES.max(input_len)
}

fn parse_positive(digits: &str, base: Base) -> Option<BigUint> {
    BigUint::parse_bytes(digits.as_bytes(), base.radix()).filter(|value| !value.is_zero())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

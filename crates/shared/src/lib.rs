//! Domain types shared by the converter core and its display frontends.

pub mod domain;
pub mod error;

pub use domain::{Base, BinaryText, BitSequence, DecimalText, MIN_SQUARES};
pub use error::{DomainError, ErrorCode, ErrorReport};

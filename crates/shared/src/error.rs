use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Base;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidDigit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("'{ch}' at position {position} is not a {base} digit")]
    InvalidDigit {
        base: Base,
        ch: char,
        position: usize,
    },
}

impl DomainError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidDigit { .. } => ErrorCode::InvalidDigit,
        }
    }
}

/// Machine-readable form of a [`DomainError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&DomainError> for ErrorReport {
    fn from(value: &DomainError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}

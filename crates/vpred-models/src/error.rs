//! Model error types.

use thiserror::Error;

use crate::field::FormField;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Unknown numeric policy: {0}")]
    UnknownPolicy(String),

    #[error("Invalid number for {field}: {raw:?}")]
    InvalidNumber { field: FormField, raw: String },
}

impl ModelError {
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    pub fn invalid_number(field: FormField, raw: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            raw: raw.into(),
        }
    }
}

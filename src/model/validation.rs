// SPDX-License-Identifier: GPL-3.0-only
use thiserror::Error;

/// Attribute constraint violated while building a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text attribute is empty or whitespace only
    #[error("{field} cannot be blank")]
    Blank { field: &'static str, value: String },

    /// A capacity-like attribute is below zero
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: i32 },
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        "invalid_value"
    }

    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Blank { field, .. } | ValidationError::Negative { field, .. } => field,
        }
    }

    pub fn value(&self) -> String {
        match self {
            ValidationError::Blank { value, .. } => value.clone(),
            ValidationError::Negative { value, .. } => value.to_string(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reject empty or whitespace-only identity text
pub fn require_non_blank(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn require_non_negative(field: &'static str, value: i32) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

// SPDX-License-Identifier: GPL-3.0-only
use thiserror::Error;

use crate::model::ValidationError;

/// Failure returned by a repository operation
///
/// Both variants are ordinary values: the store is never left half-updated
/// and the caller can keep issuing operations afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("no record with {field} = {value}")]
    NotFound { field: &'static str, value: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RepositoryError {
    pub fn not_found(field: &'static str, value: impl ToString) -> Self {
        RepositoryError::NotFound {
            field,
            value: value.to_string(),
        }
    }

    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RepositoryError::NotFound { .. } => "not_found",
            RepositoryError::Validation(e) => e.code(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            RepositoryError::NotFound { field, .. } => field,
            RepositoryError::Validation(e) => e.field(),
        }
    }

    pub fn value(&self) -> String {
        match self {
            RepositoryError::NotFound { value, .. } => value.clone(),
            RepositoryError::Validation(e) => e.value(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

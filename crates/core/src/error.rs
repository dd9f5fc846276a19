//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// rejected requests, denied access). Presentation concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation at construction or in a mutator.
    #[error("validation failed on `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A request was refused without touching any state (wrong input kind,
    /// non-positive quantity, ...).
    #[error("rejected: {0}")]
    Rejected(String),

    /// Authorization failure at the domain boundary.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: msg.into(),
        }
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    /// Name of the field that failed validation, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}

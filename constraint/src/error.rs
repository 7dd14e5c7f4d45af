//! Constraint error types.

use fmx_attribute::AttributeError;
use fmx_core::ModelId;
use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors that can occur while binding or cloning constraints.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    #[error("Unresolved variable: no feature named {name}")]
    UnresolvedVariable { name: String },

    #[error("Constraint belongs to model {expected}, not {actual}")]
    ForeignModel { expected: ModelId, actual: ModelId },

    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

impl ConstraintError {
    pub fn unresolved_variable(name: impl Into<String>) -> Self {
        Self::UnresolvedVariable { name: name.into() }
    }

    pub fn foreign_model(expected: ModelId, actual: ModelId) -> Self {
        Self::ForeignModel { expected, actual }
    }
}

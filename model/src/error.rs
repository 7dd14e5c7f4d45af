//! Model error types.

use fmx_attribute::AttributeError;
use fmx_constraint::ConstraintError;
use fmx_core::{FeatureId, ModelId};
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while editing a feature model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Feature not found: {0}")]
    FeatureNotFound(FeatureId),

    #[error("Feature {0} is named through rename_feature, not as a property")]
    NameViaRename(FeatureId),

    #[error("Model cannot hold more than {max} features")]
    TooManyFeatures { max: u32 },

    #[error("Constraint belongs to model {actual}, not {expected}")]
    ForeignConstraint { expected: ModelId, actual: ModelId },

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

impl ModelError {
    pub fn foreign_constraint(expected: ModelId, actual: ModelId) -> Self {
        Self::ForeignConstraint { expected, actual }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

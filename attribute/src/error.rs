//! Attribute error types.

use fmx_core::{Value, ValueType};
use thiserror::Error;

/// Result type for attribute operations.
pub type AttributeResult<T> = Result<T, AttributeError>;

/// Errors that can occur when defining attributes or assigning values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeError {
    #[error("Duplicate attribute: {namespace}:{name}")]
    Duplicate { namespace: String, name: String },

    #[error("Value {value} rejected by attribute {key}")]
    Validation { key: String, value: Value },

    #[error("Type mismatch for attribute {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: ValueType,
        actual: ValueType,
    },
}

impl AttributeError {
    pub fn duplicate(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Duplicate {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn validation(key: impl Into<String>, value: Value) -> Self {
        Self::Validation {
            key: key.into(),
            value,
        }
    }

    pub fn type_mismatch(key: impl Into<String>, expected: ValueType, actual: ValueType) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            actual,
        }
    }
}

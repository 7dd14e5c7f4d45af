//! FMX Integration Test Support
//!
//! Fixtures shared by the integration tests in `tests/`.
//!
//! # Example
//!
//! ```ignore
//! use fmx_tests::prelude::*;
//!
//! let model = ModelBuilder::new()
//!     .root("Root")
//!     .child("Root", "A")
//!     .hidden("A")
//!     .build();
//! ```

mod fixture;

pub use fixture::ModelBuilder;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::fixture::ModelBuilder;
    pub use fmx_attribute::{builtin, AttributeError, AttributeKey, AttributeRegistry, PropertyContainer};
    pub use fmx_constraint::{
        Constraint, ConstraintError, ConstraintKind, FeatureLookup, FeatureTree, Origin,
    };
    pub use fmx_core::{Detached, Element, FeatureId, Value, ValueType};
    pub use fmx_formula::Formula;
    pub use fmx_model::{FeatureModel, ImportPolicy, ImportReport, ModelConfig, ModelError};
}

//! FMX Constraint
//!
//! Propositional constraints attached to a feature model.
//!
//! Responsibilities:
//! - Bind a formula to the features its variables name
//! - Keep that binding consistent under concurrent readers
//! - Carry description, tags, flags and properties
//! - Clone a constraint into another model, re-resolving its features
//!
//! # Module Structure
//!
//! - `constraint` - The Constraint entity
//! - `kind` - Constraint kinds and their origin
//! - `lookup` - What a constraint needs from its model
//! - `error` - Error types for binding and cloning failures

mod constraint;
mod error;
mod kind;
mod lookup;

pub use constraint::{Constraint, FormulaBinding};
pub use error::{ConstraintError, ConstraintResult};
pub use kind::{ConstraintKind, Origin};
pub use lookup::{FeatureLookup, FeatureTree, ScopedElement};

//! FMX Model
//!
//! The feature model: features arranged in a tree, the constraints over
//! them, and the model's own properties.
//!
//! Responsibilities:
//! - Own features and keep their names unique
//! - Resolve feature names for constraints
//! - Answer hidden/ancestor queries
//! - Import constraints from other models under a recovery policy

mod config;
mod error;
mod feature;
mod model;

pub use config::{ImportPolicy, ModelConfig};
pub use error::{ModelError, ModelResult};
pub use feature::Feature;
pub use model::{FeatureModel, ImportReport, SkippedConstraint};

//! FMX Core Types
//!
//! This crate provides the foundational types shared by the FMX crates:
//! - Identity types (ModelId, FeatureId, ElementId)
//! - Value types (the Value enum stored in property containers)
//! - The Element trait implemented by everything that owns properties

mod element;
mod id;
mod value;

pub use element::*;
pub use id::*;
pub use value::*;

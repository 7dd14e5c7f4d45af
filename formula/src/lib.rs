//! FMX Formula
//!
//! Propositional formulas over feature names, as attached to constraints.
//!
//! Only what the constraint layer needs lives here:
//! - Building expression trees
//! - Structural (deep) cloning and comparison
//! - Extracting variable names in occurrence order
//! - Rendering for display

mod formula;

pub use formula::Formula;

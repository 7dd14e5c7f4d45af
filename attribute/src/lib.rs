//! FMX Attribute
//!
//! Typed, namespaced attributes for model elements.
//!
//! Responsibilities:
//! - Define attribute keys with value type, default and validator
//! - Keep a process-wide registry of defined keys
//! - Provide the built-in attributes (name, description, tags, hidden, abstract)
//! - Store per-element values in a lock-guarded property container
//!
//! # Module Structure
//!
//! - `key` - AttributeKey and its default/validator hooks
//! - `registry` - AttributeRegistry, including the global instance
//! - `builtin` - Attributes every feature model understands
//! - `container` - PropertyContainer
//! - `error` - Error types for definition and assignment failures

pub mod builtin;
mod container;
mod error;
mod key;
mod registry;

pub use container::PropertyContainer;
pub use error::{AttributeError, AttributeResult};
pub use key::{AttributeKey, ComputedDefault, DefaultValue, Validator};
pub use registry::AttributeRegistry;

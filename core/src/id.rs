//! Identity types for FMX model elements.
//!
//! All identifiers are plain integers that are:
//! - Unique within their namespace
//! - Immutable once assigned
//! - Meaningless outside the model that issued them (except `ModelId`)

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a feature model instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u64);

static NEXT_MODEL_ID: AtomicU64 = AtomicU64::new(1);

impl ModelId {
    /// Create a new ModelId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a ModelId that no other model in this process uses.
    pub fn fresh() -> Self {
        Self(NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Handle to a feature inside one model's feature arena.
///
/// A FeatureId is only meaningful for the model that issued it; constraints
/// cloned into another model re-resolve their features by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(pub u32);

impl FeatureId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Position of the feature in its model's arena.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// Stable identifier of a model element (feature or constraint).
///
/// This is what the built-in `name` attribute renders into its computed
/// default (`@<id>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl ElementId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential allocator for element ids, shareable behind `&self`.
#[derive(Debug)]
pub struct ElementIdAllocator {
    next: AtomicU64,
}

impl Default for ElementIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementIdAllocator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Hand out the next id.
    pub fn alloc(&self) -> ElementId {
        ElementId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

//! The owner side of attribute storage.
//!
//! Features, constraints and models all own a property container. Attribute
//! validators and computed defaults see the owner only through this trait.

use crate::ElementId;

/// A model element that owns properties.
pub trait Element {
    /// Stable identifier of this element, if it has one.
    fn identifier(&self) -> Option<ElementId>;

    /// Whether the model this element belongs to already has a feature with
    /// the given name.
    fn has_feature_named(&self, name: &str) -> bool;
}

/// An owner with no identity and no model, for free-standing containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl Element for Detached {
    fn identifier(&self) -> Option<ElementId> {
        None
    }

    fn has_feature_named(&self, _name: &str) -> bool {
        false
    }
}

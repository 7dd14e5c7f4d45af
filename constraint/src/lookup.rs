//! What a constraint needs from the model that owns it.

use fmx_core::{Element, ElementId, FeatureId, ModelId};

/// Name resolution and id allocation provided by a feature model.
pub trait FeatureLookup {
    /// Identity of the model.
    fn model_id(&self) -> ModelId;

    /// Resolve a feature by name.
    fn lookup_feature_by_name(&self, name: &str) -> Option<FeatureId>;

    /// Allocate an element id for a new element of this model.
    fn next_element_id(&self) -> ElementId;
}

/// Structure queries used by `Constraint::has_hidden_features`.
pub trait FeatureTree {
    fn is_hidden(&self, feature: FeatureId) -> bool;

    /// Whether any ancestor of `feature` is hidden.
    fn has_hidden_parent(&self, feature: FeatureId) -> bool;
}

/// An element seen together with the model it belongs to.
///
/// This is the owner handed to attribute validators and computed defaults.
pub struct ScopedElement<'m, M: FeatureLookup + ?Sized> {
    id: Option<ElementId>,
    model: &'m M,
}

impl<'m, M: FeatureLookup + ?Sized> ScopedElement<'m, M> {
    pub fn new(id: Option<ElementId>, model: &'m M) -> Self {
        Self { id, model }
    }
}

impl<M: FeatureLookup + ?Sized> Element for ScopedElement<'_, M> {
    fn identifier(&self) -> Option<ElementId> {
        self.id
    }

    fn has_feature_named(&self, name: &str) -> bool {
        self.model.lookup_feature_by_name(name).is_some()
    }
}

//! Features.

use fmx_attribute::{builtin, PropertyContainer};
use fmx_core::{Detached, ElementId, FeatureId};

/// A named configuration unit of a feature model.
///
/// Name, hidden and abstract flags live in the feature's properties under
/// the built-in attributes.
#[derive(Debug, Clone)]
pub struct Feature {
    pub(crate) id: FeatureId,
    pub(crate) element_id: ElementId,
    pub(crate) parent: Option<FeatureId>,
    pub(crate) properties: PropertyContainer,
}

impl Feature {
    pub fn id(&self) -> FeatureId {
        self.id
    }

    pub fn element_id(&self) -> ElementId {
        self.element_id
    }

    pub fn parent(&self) -> Option<FeatureId> {
        self.parent
    }

    pub fn name(&self) -> String {
        self.properties
            .get_stored(&builtin::name())
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| format!("@{}", self.element_id))
    }

    pub fn is_hidden(&self) -> bool {
        self.flag(&builtin::hidden())
    }

    pub fn is_abstract(&self) -> bool {
        self.flag(&builtin::abstract_())
    }

    pub fn properties(&self) -> &PropertyContainer {
        &self.properties
    }

    fn flag(&self, key: &fmx_attribute::AttributeKey) -> bool {
        self.properties
            .get(key, &Detached)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}

//! The feature model container.

use crate::config::{ImportPolicy, ModelConfig};
use crate::error::{ModelError, ModelResult};
use crate::feature::Feature;
use fmx_attribute::{builtin, AttributeKey, PropertyContainer};
use fmx_constraint::{Constraint, ConstraintError, FeatureLookup, FeatureTree, Origin, ScopedElement};
use fmx_core::{Element, ElementId, ElementIdAllocator, FeatureId, ModelId, Value};
use fmx_formula::Formula;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A constraint left out by an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedConstraint {
    /// Index of the constraint in the source model.
    pub index: usize,
    /// First variable the target model could not resolve.
    pub variable: String,
}

/// Outcome of `FeatureModel::import_constraints`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: Vec<SkippedConstraint>,
}

/// Features, their tree, and the constraints over them.
#[derive(Debug)]
pub struct FeatureModel {
    id: ModelId,
    config: ModelConfig,
    features: Vec<Feature>,
    names: HashMap<String, FeatureId>,
    constraints: Vec<Constraint>,
    properties: PropertyContainer,
    element_ids: ElementIdAllocator,
}

impl Default for FeatureModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureModel {
    /// Create an empty model with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ModelConfig::default())
    }

    pub fn with_config(config: ModelConfig) -> Self {
        Self {
            id: ModelId::fresh(),
            config,
            features: Vec::new(),
            names: HashMap::new(),
            constraints: Vec::new(),
            properties: PropertyContainer::new(),
            element_ids: ElementIdAllocator::new(),
        }
    }

    pub fn id(&self) -> ModelId {
        self.id
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    // ==================== Features ====================

    /// Add a feature below `parent` (or as a root).
    ///
    /// The name goes through the built-in `name` attribute, so a name
    /// already used in this model is rejected.
    pub fn add_feature(&mut self, name: impl Into<String>, parent: Option<FeatureId>) -> ModelResult<FeatureId> {
        if let Some(parent) = parent {
            self.feature(parent).ok_or(ModelError::FeatureNotFound(parent))?;
        }
        let name = name.into();
        let id = feature_id_at(self.features.len())?;
        let element_id = self.element_ids.alloc();
        let properties = PropertyContainer::new();
        properties.set(
            &builtin::name(),
            Value::from(name.as_str()),
            &ScopedElement::new(Some(element_id), &*self),
        )?;

        debug!(model = %self.id, feature = %id, name = %name, "added feature");
        self.features.push(Feature {
            id,
            element_id,
            parent,
            properties,
        });
        self.names.insert(name, id);
        Ok(id)
    }

    /// Give a feature a new, unused name.
    ///
    /// Constraints mentioning the old name are rewritten to the new one.
    /// Renaming a feature to its current name does nothing.
    pub fn rename_feature(&mut self, id: FeatureId, new_name: impl Into<String>) -> ModelResult<()> {
        let feature = self.feature(id).ok_or(ModelError::FeatureNotFound(id))?;
        let old_name = feature.name();
        let new_name = new_name.into();
        if old_name == new_name {
            return Ok(());
        }
        feature.properties.set(
            &builtin::name(),
            Value::from(new_name.as_str()),
            &ScopedElement::new(Some(feature.element_id), &*self),
        )?;
        self.names.remove(&old_name);
        self.names.insert(new_name.clone(), id);

        let mut rewritten = 0;
        for constraint in &self.constraints {
            let Some(mut formula) = constraint.formula() else {
                continue;
            };
            if !formula.variable_names().contains(&old_name) {
                continue;
            }
            formula.rename_variables(&mut |name| {
                if *name == old_name {
                    *name = new_name.clone();
                }
            });
            constraint.set_formula(&*self, formula)?;
            rewritten += 1;
        }
        debug!(model = %self.id, feature = %id, from = %old_name, to = %new_name, rewritten, "renamed feature");
        Ok(())
    }

    pub fn feature(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(id.index())
    }

    pub fn feature_by_name(&self, name: &str) -> Option<&Feature> {
        self.names.get(name).and_then(|&id| self.feature(id))
    }

    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Direct children of `id`, in insertion order.
    pub fn children(&self, id: FeatureId) -> Vec<FeatureId> {
        self.features
            .iter()
            .filter(|f| f.parent == Some(id))
            .map(|f| f.id)
            .collect()
    }

    pub fn set_hidden(&self, id: FeatureId, hidden: bool) -> ModelResult<()> {
        self.set_feature_property(id, &builtin::hidden(), Value::Bool(hidden))
    }

    pub fn set_abstract(&self, id: FeatureId, is_abstract: bool) -> ModelResult<()> {
        self.set_feature_property(id, &builtin::abstract_(), Value::Bool(is_abstract))
    }

    /// Read a feature property, falling back to the key's default.
    pub fn feature_property(&self, id: FeatureId, key: &AttributeKey) -> ModelResult<Option<Value>> {
        let feature = self.feature(id).ok_or(ModelError::FeatureNotFound(id))?;
        Ok(feature
            .properties
            .get(key, &ScopedElement::new(Some(feature.element_id), self)))
    }

    /// Set a feature property. The `name` key is refused: names are indexed
    /// by the model and change through `rename_feature`.
    pub fn set_feature_property(&self, id: FeatureId, key: &AttributeKey, value: Value) -> ModelResult<()> {
        if *key == builtin::name() {
            return Err(ModelError::NameViaRename(id));
        }
        let feature = self.feature(id).ok_or(ModelError::FeatureNotFound(id))?;
        feature
            .properties
            .set(key, value, &ScopedElement::new(Some(feature.element_id), self))?;
        Ok(())
    }

    // ==================== Constraints ====================

    /// Create a constraint over `formula` and append it.
    pub fn add_constraint(&mut self, formula: Formula) -> ModelResult<usize> {
        let constraint = Constraint::new(&*self, formula)?;
        if !self.config.default_tags.is_empty() {
            constraint.set_tags(self.config.default_tags.iter().cloned());
        }
        debug!(model = %self.id, constraint = %constraint, "added constraint");
        self.constraints.push(constraint);
        Ok(self.constraints.len() - 1)
    }

    /// Append a constraint that was built for this model.
    pub fn push_constraint(&mut self, constraint: Constraint) -> ModelResult<usize> {
        if constraint.model_id() != self.id {
            return Err(ModelError::foreign_constraint(self.id, constraint.model_id()));
        }
        self.constraints.push(constraint);
        Ok(self.constraints.len() - 1)
    }

    pub fn constraint(&self, index: usize) -> Option<&Constraint> {
        self.constraints.get(index)
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn remove_constraint(&mut self, index: usize) -> Option<Constraint> {
        if index < self.constraints.len() {
            Some(self.constraints.remove(index))
        } else {
            None
        }
    }

    /// Clone all constraints of `source` into this model using the
    /// configured policy.
    pub fn import_constraints(&mut self, source: &FeatureModel) -> ModelResult<ImportReport> {
        self.import_constraints_with(source, self.config.import_policy)
    }

    /// Clone all constraints of `source` into this model.
    ///
    /// With `FailFast` nothing is added unless every constraint resolves.
    pub fn import_constraints_with(
        &mut self,
        source: &FeatureModel,
        policy: ImportPolicy,
    ) -> ModelResult<ImportReport> {
        let mut imported = Vec::new();
        let mut report = ImportReport::default();

        for (index, constraint) in source.constraints.iter().enumerate() {
            match constraint.clone_into(&*self) {
                Ok(clone) => imported.push(clone),
                Err(ConstraintError::UnresolvedVariable { name }) if policy == ImportPolicy::Skip => {
                    warn!(source = %source.id, index, variable = %name, "skipped constraint");
                    report.skipped.push(SkippedConstraint {
                        index,
                        variable: name,
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }

        if self.config.tag_imported_origin {
            for clone in &imported {
                if clone.kind().origin().is_none() {
                    clone.set_origin(Origin::External(source.id.to_string()));
                }
            }
        }

        report.imported = imported.len();
        debug!(
            source = %source.id,
            target = %self.id,
            imported = report.imported,
            skipped = report.skipped.len(),
            "imported constraints"
        );
        self.constraints.extend(imported);
        Ok(report)
    }

    // ==================== Model properties ====================

    pub fn properties(&self) -> &PropertyContainer {
        &self.properties
    }

    pub fn property(&self, key: &AttributeKey) -> Option<Value> {
        self.properties.get(key, self)
    }

    pub fn set_property(&self, key: &AttributeKey, value: Value) -> ModelResult<()> {
        self.properties.set(key, value, self)?;
        Ok(())
    }
}

fn feature_id_at(index: usize) -> ModelResult<FeatureId> {
    u32::try_from(index)
        .map(FeatureId::new)
        .map_err(|_| ModelError::TooManyFeatures { max: u32::MAX })
}

impl FeatureLookup for FeatureModel {
    fn model_id(&self) -> ModelId {
        self.id
    }

    fn lookup_feature_by_name(&self, name: &str) -> Option<FeatureId> {
        self.names.get(name).copied()
    }

    fn next_element_id(&self) -> ElementId {
        self.element_ids.alloc()
    }
}

impl FeatureTree for FeatureModel {
    fn is_hidden(&self, feature: FeatureId) -> bool {
        self.feature(feature).is_some_and(Feature::is_hidden)
    }

    fn has_hidden_parent(&self, feature: FeatureId) -> bool {
        let mut current = self.feature(feature).and_then(Feature::parent);
        while let Some(parent) = current {
            match self.feature(parent) {
                Some(f) if f.is_hidden() => return true,
                Some(f) => current = f.parent,
                None => return false,
            }
        }
        false
    }
}

// The model itself has no element id; its name attribute has no default.
impl Element for FeatureModel {
    fn identifier(&self) -> Option<ElementId> {
        None
    }

    fn has_feature_named(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }
}

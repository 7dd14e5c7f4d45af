//! The Constraint entity.

use crate::error::{ConstraintError, ConstraintResult};
use crate::kind::{ConstraintKind, Origin};
use crate::lookup::{FeatureLookup, FeatureTree, ScopedElement};
use fmx_attribute::{AttributeKey, PropertyContainer};
use fmx_core::{ElementId, FeatureId, ModelId, Value};
use fmx_formula::Formula;
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// A formula together with the features its variables resolved to.
///
/// Always replaced as a whole, so readers holding one see a consistent pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormulaBinding {
    formula: Option<Formula>,
    features: Vec<FeatureId>,
}

impl FormulaBinding {
    pub fn formula(&self) -> Option<&Formula> {
        self.formula.as_ref()
    }

    /// Contained features in variable-extraction order.
    pub fn features(&self) -> &[FeatureId] {
        &self.features
    }

    fn resolve<M: FeatureLookup + ?Sized>(model: &M, formula: Option<Formula>) -> ConstraintResult<Self> {
        let mut features = Vec::new();
        if let Some(formula) = &formula {
            for name in formula.variable_names() {
                match model.lookup_feature_by_name(&name) {
                    Some(feature) => features.push(feature),
                    None => {
                        warn!(model = %model.model_id(), variable = %name, "unresolved variable");
                        return Err(ConstraintError::unresolved_variable(name));
                    }
                }
            }
        }
        Ok(Self { formula, features })
    }
}

/// A propositional constraint below the feature diagram.
///
/// Mutators take `&self`: the binding, the tags and the properties each sit
/// behind their own lock. Readers always get copies.
#[derive(Debug)]
pub struct Constraint {
    id: ElementId,
    model_id: ModelId,
    binding: RwLock<Arc<FormulaBinding>>,
    description: RwLock<String>,
    tags: Mutex<BTreeSet<String>>,
    implicit: AtomicBool,
    selected: AtomicBool,
    properties: PropertyContainer,
    kind: RwLock<ConstraintKind>,
}

impl Constraint {
    /// Create a standard constraint owned by `model`.
    pub fn new<M: FeatureLookup + ?Sized>(model: &M, formula: Formula) -> ConstraintResult<Self> {
        let constraint = Self::empty(model);
        constraint.set_formula(model, formula)?;
        Ok(constraint)
    }

    /// Create a constraint tagged with `origin`.
    pub fn with_origin<M: FeatureLookup + ?Sized>(
        model: &M,
        formula: Formula,
        origin: Origin,
    ) -> ConstraintResult<Self> {
        let constraint = Self::new(model, formula)?;
        *constraint.kind.write() = ConstraintKind::WithOrigin(origin);
        Ok(constraint)
    }

    /// Create a constraint without a formula.
    pub fn empty<M: FeatureLookup + ?Sized>(model: &M) -> Self {
        Self {
            id: model.next_element_id(),
            model_id: model.model_id(),
            binding: RwLock::new(Arc::new(FormulaBinding::default())),
            description: RwLock::new(String::new()),
            tags: Mutex::new(BTreeSet::new()),
            implicit: AtomicBool::new(false),
            selected: AtomicBool::new(false),
            properties: PropertyContainer::new(),
            kind: RwLock::new(ConstraintKind::Standard),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The model this constraint belongs to.
    pub fn model_id(&self) -> ModelId {
        self.model_id
    }

    // ==================== Formula ====================

    /// Replace the formula and re-resolve the contained features.
    ///
    /// All variables are resolved before anything changes: on error the
    /// previous formula and features stay in place.
    pub fn set_formula<M: FeatureLookup + ?Sized>(&self, model: &M, formula: Formula) -> ConstraintResult<()> {
        self.rebind(model, Some(formula))
    }

    /// Drop the formula; the constraint then contains no features.
    pub fn clear_formula(&self) {
        *self.binding.write() = Arc::new(FormulaBinding::default());
    }

    fn rebind<M: FeatureLookup + ?Sized>(&self, model: &M, formula: Option<Formula>) -> ConstraintResult<()> {
        self.check_model(model)?;
        let binding = FormulaBinding::resolve(model, formula)?;
        debug!(
            constraint = %self.id,
            features = binding.features.len(),
            "rebound formula"
        );
        *self.binding.write() = Arc::new(binding);
        Ok(())
    }

    /// Deep copy of the current formula.
    pub fn formula(&self) -> Option<Formula> {
        self.binding.read().formula.clone()
    }

    /// Snapshot of the current formula and its features.
    pub fn binding(&self) -> Arc<FormulaBinding> {
        self.binding.read().clone()
    }

    /// Copy of the contained features, in variable-extraction order.
    pub fn contained_features(&self) -> Vec<FeatureId> {
        self.binding.read().features.clone()
    }

    pub fn contains_feature(&self, feature: FeatureId) -> bool {
        self.binding.read().features.contains(&feature)
    }

    /// Whether any contained feature is hidden, directly or via an ancestor.
    pub fn has_hidden_features<T: FeatureTree + ?Sized>(&self, tree: &T) -> bool {
        self.binding()
            .features
            .iter()
            .any(|&f| tree.is_hidden(f) || tree.has_hidden_parent(f))
    }

    /// Formula rendered for display, empty without formula.
    pub fn display_name(&self) -> String {
        self.binding
            .read()
            .formula
            .as_ref()
            .map(|f| f.to_string())
            .unwrap_or_default()
    }

    // ==================== Metadata ====================

    pub fn description(&self) -> String {
        self.description.read().clone()
    }

    pub fn set_description(&self, description: impl Into<String>) {
        *self.description.write() = description.into();
    }

    /// Copy of the tag set.
    pub fn tags(&self) -> BTreeSet<String> {
        self.tags.lock().clone()
    }

    /// Replace all tags.
    pub fn set_tags<I, S>(&self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        *self.tags.lock() = tags;
    }

    pub fn is_implicit(&self) -> bool {
        self.implicit.load(Ordering::Acquire)
    }

    pub fn set_implicit(&self, implicit: bool) {
        self.implicit.store(implicit, Ordering::Release);
    }

    pub fn is_selected(&self) -> bool {
        self.selected.load(Ordering::Acquire)
    }

    pub fn set_selected(&self, selected: bool) {
        self.selected.store(selected, Ordering::Release);
    }

    // ==================== Kind ====================

    pub fn kind(&self) -> ConstraintKind {
        self.kind.read().clone()
    }

    /// Tag the constraint with an origin, turning it into a `WithOrigin` kind.
    pub fn set_origin(&self, origin: Origin) {
        *self.kind.write() = ConstraintKind::WithOrigin(origin);
    }

    pub fn is_from_external_source(&self) -> bool {
        self.kind.read().is_from_external_source()
    }

    // ==================== Properties ====================

    pub fn properties(&self) -> &PropertyContainer {
        &self.properties
    }

    /// Read a property, falling back to the key's default for this constraint.
    ///
    /// `model` must be the model this constraint belongs to.
    pub fn property<M: FeatureLookup + ?Sized>(
        &self,
        key: &AttributeKey,
        model: &M,
    ) -> ConstraintResult<Option<Value>> {
        self.check_model(model)?;
        Ok(self.properties.get(key, &ScopedElement::new(Some(self.id), model)))
    }

    pub fn set_property<M: FeatureLookup + ?Sized>(
        &self,
        key: &AttributeKey,
        value: Value,
        model: &M,
    ) -> ConstraintResult<()> {
        self.check_model(model)?;
        self.properties
            .set(key, value, &ScopedElement::new(Some(self.id), model))?;
        Ok(())
    }

    fn check_model<M: FeatureLookup + ?Sized>(&self, model: &M) -> ConstraintResult<()> {
        if model.model_id() != self.model_id {
            return Err(ConstraintError::foreign_model(self.model_id, model.model_id()));
        }
        Ok(())
    }

    // ==================== Cloning ====================

    /// Copy this constraint into `new_model`.
    ///
    /// The formula is deep-copied and its features are resolved again
    /// against `new_model`; feature ids of the source model are never
    /// carried over. Fails with `UnresolvedVariable` when `new_model` lacks
    /// a referenced feature. The source should not be mutated concurrently.
    pub fn clone_into<M: FeatureLookup + ?Sized>(&self, new_model: &M) -> ConstraintResult<Constraint> {
        let formula = self.formula();
        let binding = FormulaBinding::resolve(new_model, formula)?;
        let clone = Self {
            id: new_model.next_element_id(),
            model_id: new_model.model_id(),
            binding: RwLock::new(Arc::new(binding)),
            description: RwLock::new(self.description()),
            tags: Mutex::new(self.tags()),
            implicit: AtomicBool::new(self.is_implicit()),
            selected: AtomicBool::new(self.is_selected()),
            properties: PropertyContainer::copy_from(&self.properties),
            kind: RwLock::new(self.kind()),
        };
        debug!(
            source = %self.id,
            clone = %clone.id,
            model = %clone.model_id,
            "cloned constraint"
        );
        Ok(clone)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constraint [formula={}]", self.display_name())
    }
}

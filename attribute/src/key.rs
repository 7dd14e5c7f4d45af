//! Attribute keys.

use crate::error::{AttributeError, AttributeResult};
use fmx_core::{Element, Value, ValueType};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Predicate deciding whether `candidate` may be stored on `owner`.
pub type Validator = fn(owner: &dyn Element, candidate: &Value) -> bool;

/// Default computed from the owning element.
pub type ComputedDefault = fn(owner: &dyn Element) -> Option<Value>;

/// What `get` falls back to when nothing is stored.
#[derive(Clone)]
pub enum DefaultValue {
    None,
    Static(Value),
    Computed(ComputedDefault),
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::None => f.write_str("None"),
            DefaultValue::Static(value) => f.debug_tuple("Static").field(value).finish(),
            DefaultValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[derive(Clone)]
struct KeyDef {
    namespace: String,
    name: String,
    value_type: ValueType,
    default: DefaultValue,
    validator: Option<Validator>,
}

/// A typed, namespaced attribute slot.
///
/// Identity is `(namespace, name)`: two keys with the same pair compare
/// equal and hash alike regardless of their type or hooks. Clones share the
/// definition; the `with_*` builders copy it first when it is shared, so a
/// key handed out by a registry never changes.
#[derive(Clone)]
pub struct AttributeKey(Arc<KeyDef>);

impl AttributeKey {
    /// Create a key with no default and no validator.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, value_type: ValueType) -> Self {
        Self(Arc::new(KeyDef {
            namespace: namespace.into(),
            name: name.into(),
            value_type,
            default: DefaultValue::None,
            validator: None,
        }))
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        Arc::make_mut(&mut self.0).default = DefaultValue::Static(value.into());
        self
    }

    pub fn with_computed_default(mut self, compute: ComputedDefault) -> Self {
        Arc::make_mut(&mut self.0).default = DefaultValue::Computed(compute);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        Arc::make_mut(&mut self.0).validator = Some(validator);
        self
    }

    pub fn namespace(&self) -> &str {
        &self.0.namespace
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// `namespace:name`, as used in error messages.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.0.namespace, self.0.name)
    }

    pub fn value_type(&self) -> ValueType {
        self.0.value_type
    }

    pub fn default_value(&self) -> &DefaultValue {
        &self.0.default
    }

    pub fn has_validator(&self) -> bool {
        self.0.validator.is_some()
    }

    /// Resolve the default for `owner`, if the key has one.
    pub fn default_for(&self, owner: &dyn Element) -> Option<Value> {
        match &self.0.default {
            DefaultValue::None => None,
            DefaultValue::Static(value) => Some(value.clone()),
            DefaultValue::Computed(compute) => compute(owner),
        }
    }

    /// Check `value` against the declared type and the validator.
    pub fn check(&self, value: &Value, owner: &dyn Element) -> AttributeResult<()> {
        let actual = value.value_type();
        if !self.0.value_type.accepts(actual) {
            return Err(AttributeError::type_mismatch(
                self.qualified_name(),
                self.0.value_type,
                actual,
            ));
        }
        if let Some(validator) = self.0.validator {
            if !validator(owner, value) {
                return Err(AttributeError::validation(self.qualified_name(), value.clone()));
            }
        }
        Ok(())
    }

    pub(crate) fn identity(&self) -> (String, String) {
        (self.0.namespace.clone(), self.0.name.clone())
    }
}

impl PartialEq for AttributeKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.namespace == other.0.namespace && self.0.name == other.0.name
    }
}

impl Eq for AttributeKey {}

impl Hash for AttributeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.namespace.hash(state);
        self.0.name.hash(state);
    }
}

impl fmt::Debug for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeKey")
            .field("namespace", &self.0.namespace)
            .field("name", &self.0.name)
            .field("value_type", &self.0.value_type)
            .field("default", &self.0.default)
            .field("validator", &self.0.validator.is_some())
            .finish()
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0.namespace, self.0.name)
    }
}

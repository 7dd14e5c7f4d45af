//! Attributes every feature model understands.
//!
//! Features, constraints and models are annotated with these keys. They are
//! pre-registered in [`AttributeRegistry::global`](crate::AttributeRegistry::global).

use crate::key::AttributeKey;
use fmx_core::{Element, Value, ValueType};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// Namespace of the built-in attributes.
pub const NAMESPACE: &str = "fmx.feature.model";

static NAME: Lazy<AttributeKey> = Lazy::new(|| {
    AttributeKey::new(NAMESPACE, "name", ValueType::String)
        .with_validator(name_is_unused)
        .with_computed_default(name_from_identifier)
});

static DESCRIPTION: Lazy<AttributeKey> =
    Lazy::new(|| AttributeKey::new(NAMESPACE, "description", ValueType::String));

static TAGS: Lazy<AttributeKey> = Lazy::new(|| {
    AttributeKey::new(NAMESPACE, "tags", ValueType::StringSet).with_default(BTreeSet::<String>::new())
});

static HIDDEN: Lazy<AttributeKey> =
    Lazy::new(|| AttributeKey::new(NAMESPACE, "hidden", ValueType::Bool).with_default(false));

static ABSTRACT: Lazy<AttributeKey> =
    Lazy::new(|| AttributeKey::new(NAMESPACE, "abstract", ValueType::Bool).with_default(false));

// Uniqueness is scoped to the owner's model.
fn name_is_unused(owner: &dyn Element, candidate: &Value) -> bool {
    candidate
        .as_str()
        .is_some_and(|name| !owner.has_feature_named(name))
}

fn name_from_identifier(owner: &dyn Element) -> Option<Value> {
    owner.identifier().map(|id| Value::String(format!("@{}", id)))
}

/// Element name. Defaults to `@<identifier>`; a name already used by a
/// feature of the same model is rejected.
pub fn name() -> AttributeKey {
    NAME.clone()
}

pub fn description() -> AttributeKey {
    DESCRIPTION.clone()
}

/// Free-form tags, empty by default.
pub fn tags() -> AttributeKey {
    TAGS.clone()
}

pub fn hidden() -> AttributeKey {
    HIDDEN.clone()
}

pub fn abstract_() -> AttributeKey {
    ABSTRACT.clone()
}

/// All built-in keys.
pub fn all() -> Vec<AttributeKey> {
    vec![name(), description(), tags(), hidden(), abstract_()]
}

//! Per-element attribute storage.

use crate::error::AttributeResult;
use crate::key::AttributeKey;
use fmx_core::{Element, Value};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::trace;

/// Attribute values of one model element.
///
/// The map sits behind its own mutex: a `get` never observes a half-applied
/// `set`, and two containers never contend with each other. The owner is
/// passed in on every call that may need it (validators and computed
/// defaults), so the container holds no back-reference.
#[derive(Debug, Default)]
pub struct PropertyContainer {
    values: Mutex<HashMap<AttributeKey, Value>>,
}

impl PropertyContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Independent deep copy of `other`.
    pub fn copy_from(other: &PropertyContainer) -> Self {
        let values = other.values.lock().clone();
        Self {
            values: Mutex::new(values),
        }
    }

    /// Stored value, else the key's default for `owner`, else `None`.
    pub fn get(&self, key: &AttributeKey, owner: &dyn Element) -> Option<Value> {
        let stored = self.get_stored(key);
        stored.or_else(|| key.default_for(owner))
    }

    /// Stored value only, ignoring defaults.
    pub fn get_stored(&self, key: &AttributeKey) -> Option<Value> {
        self.values.lock().get(key).cloned()
    }

    /// Store `value` under `key` after type and validator checks.
    ///
    /// On error nothing is stored and any previous value stays in place.
    pub fn set(&self, key: &AttributeKey, value: Value, owner: &dyn Element) -> AttributeResult<()> {
        key.check(&value, owner)?;
        trace!(key = %key, value = %value, "set attribute");
        self.values.lock().insert(key.clone(), value);
        Ok(())
    }

    /// Drop the stored value; `get` falls back to the default afterwards.
    pub fn remove(&self, key: &AttributeKey) -> Option<Value> {
        self.values.lock().remove(key)
    }

    pub fn contains(&self, key: &AttributeKey) -> bool {
        self.values.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }

    /// Keys with a stored value, sorted by qualified name.
    pub fn keys(&self) -> Vec<AttributeKey> {
        let mut keys: Vec<AttributeKey> = self.values.lock().keys().cloned().collect();
        keys.sort_by_key(|key| key.qualified_name());
        keys
    }
}

impl Clone for PropertyContainer {
    fn clone(&self) -> Self {
        Self::copy_from(self)
    }
}

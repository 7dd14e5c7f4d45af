//! The attribute registry.

use crate::builtin;
use crate::error::{AttributeError, AttributeResult};
use crate::key::{AttributeKey, DefaultValue};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, warn};

static GLOBAL: Lazy<AttributeRegistry> = Lazy::new(AttributeRegistry::with_builtins);

/// Registry of attribute keys, indexed by `(namespace, name)`.
///
/// Keys can be added and looked up, never replaced or removed.
#[derive(Debug, Default)]
pub struct AttributeRegistry {
    keys: RwLock<HashMap<(String, String), AttributeKey>>,
}

impl AttributeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in attributes.
    pub fn with_builtins() -> Self {
        let keys = builtin::all()
            .into_iter()
            .map(|key| (key.identity(), key))
            .collect();
        Self {
            keys: RwLock::new(keys),
        }
    }

    /// The process-wide registry.
    ///
    /// Initialized with the built-in attributes on first use and never torn
    /// down. Define custom attributes at startup, before any container
    /// stores values for them.
    pub fn global() -> &'static AttributeRegistry {
        &GLOBAL
    }

    /// Register a new key.
    ///
    /// Fails if `(namespace, name)` is already taken or if a static default
    /// does not fit the declared type. A failed call leaves the registry as
    /// it was.
    pub fn define(&self, key: AttributeKey) -> AttributeResult<AttributeKey> {
        if let DefaultValue::Static(value) = key.default_value() {
            if !key.value_type().accepts(value.value_type()) {
                warn!(key = %key, "default value does not match declared type");
                return Err(AttributeError::type_mismatch(
                    key.qualified_name(),
                    key.value_type(),
                    value.value_type(),
                ));
            }
        }

        let mut keys = self.keys.write();
        let identity = key.identity();
        if keys.contains_key(&identity) {
            warn!(key = %key, "attribute already defined");
            return Err(AttributeError::duplicate(identity.0, identity.1));
        }
        debug!(key = %key, value_type = %key.value_type(), "defined attribute");
        keys.insert(identity, key.clone());
        Ok(key)
    }

    /// Look up a key by namespace and name.
    pub fn lookup(&self, namespace: &str, name: &str) -> Option<AttributeKey> {
        self.keys
            .read()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.lookup(namespace, name).is_some()
    }

    /// Number of defined keys.
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }

    /// Snapshot of all keys, sorted by qualified name.
    pub fn keys(&self) -> Vec<AttributeKey> {
        let mut keys: Vec<AttributeKey> = self.keys.read().values().cloned().collect();
        keys.sort_by_key(|key| key.qualified_name());
        keys
    }
}

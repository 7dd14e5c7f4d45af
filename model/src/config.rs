//! Configuration for feature models

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What to do with a constraint that cannot be resolved in the target model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportPolicy {
    /// Abort the whole import on the first unresolved variable.
    #[default]
    FailFast,
    /// Leave the constraint out and report it.
    Skip,
}

/// Configuration for a feature model
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Policy used by `FeatureModel::import_constraints`
    pub import_policy: ImportPolicy,
    /// Tags given to constraints created through `FeatureModel::add_constraint`
    pub default_tags: BTreeSet<String>,
    /// Mark imported constraints as coming from the source model
    pub tag_imported_origin: bool,
}

impl ModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_import_policy(mut self, policy: ImportPolicy) -> Self {
        self.import_policy = policy;
        self
    }

    pub fn with_default_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tag_imported_origin(mut self, enabled: bool) -> Self {
        self.tag_imported_origin = enabled;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        serde_json::from_str(json).map_err(|e| ModelError::config(e.to_string()))
    }

    pub fn to_json(&self) -> ModelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ModelError::config(e.to_string()))
    }
}

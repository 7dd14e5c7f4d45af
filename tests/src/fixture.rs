//! Model fixtures.

use fmx_constraint::FeatureLookup;
use fmx_model::{FeatureModel, ModelConfig};

enum Step {
    Feature { name: String, parent: Option<String> },
    Hidden(String),
}

/// Builds a feature model from a short description.
///
/// Panics on malformed fixtures; fixtures are test input.
#[derive(Default)]
pub struct ModelBuilder {
    config: ModelConfig,
    steps: Vec<Step>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a feature without parent.
    pub fn root(mut self, name: &str) -> Self {
        self.steps.push(Step::Feature {
            name: name.to_string(),
            parent: None,
        });
        self
    }

    /// Add several features without parent.
    pub fn roots(mut self, names: &[&str]) -> Self {
        for name in names {
            self = self.root(name);
        }
        self
    }

    pub fn child(mut self, parent: &str, name: &str) -> Self {
        self.steps.push(Step::Feature {
            name: name.to_string(),
            parent: Some(parent.to_string()),
        });
        self
    }

    pub fn hidden(mut self, name: &str) -> Self {
        self.steps.push(Step::Hidden(name.to_string()));
        self
    }

    pub fn build(self) -> FeatureModel {
        let mut model = FeatureModel::with_config(self.config);
        for step in self.steps {
            match step {
                Step::Feature { name, parent } => {
                    let parent = parent.map(|p| {
                        model
                            .lookup_feature_by_name(&p)
                            .unwrap_or_else(|| panic!("unknown parent {}", p))
                    });
                    model
                        .add_feature(name.as_str(), parent)
                        .unwrap_or_else(|e| panic!("cannot add {}: {}", name, e));
                }
                Step::Hidden(name) => {
                    let id = model
                        .lookup_feature_by_name(&name)
                        .unwrap_or_else(|| panic!("unknown feature {}", name));
                    model
                        .set_hidden(id, true)
                        .unwrap_or_else(|e| panic!("cannot hide {}: {}", name, e));
                }
            }
        }
        model
    }
}

//! Constraint kinds.

use std::fmt;

/// Where a constraint came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    /// Defined in the model itself.
    #[default]
    Internal,
    /// Imported from another model, identified by `source`.
    External(String),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Internal => f.write_str("internal"),
            Origin::External(source) => write!(f, "external({})", source),
        }
    }
}

/// Closed set of constraint kinds.
///
/// All kinds share the same record; only the behavior below differs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ConstraintKind {
    #[default]
    Standard,
    WithOrigin(Origin),
}

impl ConstraintKind {
    /// Origin tag, if this kind carries one.
    pub fn origin(&self) -> Option<&Origin> {
        match self {
            ConstraintKind::Standard => None,
            ConstraintKind::WithOrigin(origin) => Some(origin),
        }
    }

    /// A standard constraint counts as internal.
    pub fn is_from_external_source(&self) -> bool {
        match self {
            ConstraintKind::Standard => false,
            ConstraintKind::WithOrigin(origin) => *origin != Origin::Internal,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConstraintKind::Standard => "standard",
            ConstraintKind::WithOrigin(_) => "with-origin",
        }
    }
}

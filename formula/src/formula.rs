//! Propositional expression tree.

use std::fmt;

/// A propositional formula over feature names.
///
/// Every node owns its children, so `Clone` is a full structural copy and
/// two formulas never share subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    True,
    False,
    /// Reference to a feature by name.
    Var(String),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Equiv(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn var(name: impl Into<String>) -> Self {
        Formula::Var(name.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Formula) -> Self {
        Formula::Not(Box::new(operand))
    }

    pub fn and(operands: impl IntoIterator<Item = Formula>) -> Self {
        Formula::And(operands.into_iter().collect())
    }

    pub fn or(operands: impl IntoIterator<Item = Formula>) -> Self {
        Formula::Or(operands.into_iter().collect())
    }

    pub fn implies(lhs: Formula, rhs: Formula) -> Self {
        Formula::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn equiv(lhs: Formula, rhs: Formula) -> Self {
        Formula::Equiv(Box::new(lhs), Box::new(rhs))
    }

    /// Names of all variables, left to right, one entry per occurrence.
    ///
    /// `A & (B | A)` yields `["A", "B", "A"]`.
    pub fn variable_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<String>) {
        match self {
            Formula::True | Formula::False => {}
            Formula::Var(name) => names.push(name.clone()),
            Formula::Not(inner) => inner.collect_variables(names),
            Formula::And(operands) | Formula::Or(operands) => {
                for operand in operands {
                    operand.collect_variables(names);
                }
            }
            Formula::Implies(lhs, rhs) | Formula::Equiv(lhs, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
        }
    }

    /// Whether this node is a leaf (variable or constant).
    pub fn is_atomic(&self) -> bool {
        matches!(self, Formula::True | Formula::False | Formula::Var(_))
    }

    /// Apply `f` to every variable name in place.
    pub fn rename_variables(&mut self, f: &mut impl FnMut(&mut String)) {
        match self {
            Formula::True | Formula::False => {}
            Formula::Var(name) => f(name),
            Formula::Not(inner) => inner.rename_variables(f),
            Formula::And(operands) | Formula::Or(operands) => {
                for operand in operands {
                    operand.rename_variables(f);
                }
            }
            Formula::Implies(lhs, rhs) | Formula::Equiv(lhs, rhs) => {
                lhs.rename_variables(f);
                rhs.rename_variables(f);
            }
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_atomic() || matches!(self, Formula::Not(_)) {
            write!(f, "{}", self)
        } else {
            write!(f, "({})", self)
        }
    }

    fn fmt_nary(f: &mut fmt::Formatter<'_>, operands: &[Formula], op: &str, empty: &str) -> fmt::Result {
        if operands.is_empty() {
            return f.write_str(empty);
        }
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", op)?;
            }
            operand.fmt_operand(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::True => f.write_str("true"),
            Formula::False => f.write_str("false"),
            Formula::Var(name) => f.write_str(name),
            Formula::Not(inner) => {
                f.write_str("-")?;
                inner.fmt_operand(f)
            }
            Formula::And(operands) => Self::fmt_nary(f, operands, "&", "true"),
            Formula::Or(operands) => Self::fmt_nary(f, operands, "|", "false"),
            Formula::Implies(lhs, rhs) => {
                lhs.fmt_operand(f)?;
                f.write_str(" => ")?;
                rhs.fmt_operand(f)
            }
            Formula::Equiv(lhs, rhs) => {
                lhs.fmt_operand(f)?;
                f.write_str(" <=> ")?;
                rhs.fmt_operand(f)
            }
        }
    }
}

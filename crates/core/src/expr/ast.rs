//! Expression tree.

use std::fmt;

use crate::datemath::{Operator, Unit};

/// A parsed expression.
///
/// Chained operations lean left: `A + 1 month + 2 days` is
/// `DateArithmetic(DateArithmetic(A, +, 1, month), +, 2, days)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Variable {
        name: String,
    },
    DateArithmetic {
        base: Box<Expr>,
        op: Operator,
        /// Always positive; the sign lives in `op`.
        amount: u32,
        unit: Unit,
    },
}

impl Expr {
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable { name: name.into() }
    }

    /// Wrap `self` as the base of a new date arithmetic node.
    #[must_use]
    pub fn offset(self, op: Operator, amount: u32, unit: Unit) -> Self {
        Expr::DateArithmetic { base: Box::new(self), op, amount, unit }
    }

    /// The variable at the root of the chain.
    #[must_use]
    pub fn root_variable(&self) -> &str {
        match self {
            Expr::Variable { name } => name,
            Expr::DateArithmetic { base, .. } => base.root_variable(),
        }
    }

    /// Number of chained operations.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Expr::Variable { .. } => 0,
            Expr::DateArithmetic { base, .. } => base.depth() + 1,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable { name } => f.write_str(name),
            Expr::DateArithmetic { base, op, amount, unit } => {
                write!(f, "{base} {op} {amount} {}", unit.keyword(*amount))
            }
        }
    }
}

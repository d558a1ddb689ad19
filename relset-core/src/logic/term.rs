//! Logical terms: variables, symbolic constants, and integers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A term appearing in an atom's argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Term {
    /// A logic variable, scoped to the rule it appears in.
    Var(String),
    /// A symbolic constant, e.g. `ellipse`.
    Sym(String),
    /// An integer constant, e.g. a wagon position or wheel count.
    Int(i64),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn sym(name: impl Into<String>) -> Self {
        Self::Sym(name.into())
    }

    /// A term is ground when it is not a variable.
    pub fn is_ground(&self) -> bool {
        !matches!(self, Term::Var(_))
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Int(value)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) | Term::Sym(name) => write!(f, "{name}"),
            Term::Int(value) => write!(f, "{value}"),
        }
    }
}

//! Predicates and atoms. A ground atom is a fact.

use crate::logic::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed predicate vocabulary of the trains domain.
///
/// The first seven are per-wagon attributes; `wagon`, `train`, and
/// `direction` are the aggregation levels the template derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Shape,
    Length,
    Sides,
    Roof,
    Wheels,
    LoadNum,
    LoadShape,
    Wagon,
    Train,
    Direction,
}

impl Predicate {
    /// Display name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::Shape => "shape",
            Predicate::Length => "length",
            Predicate::Sides => "sides",
            Predicate::Roof => "roof",
            Predicate::Wheels => "wheels",
            Predicate::LoadNum => "load_num",
            Predicate::LoadShape => "load_shape",
            Predicate::Wagon => "wagon",
            Predicate::Train => "train",
            Predicate::Direction => "direction",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A predicate applied to an ordered argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Atom {
    pub predicate: Predicate,
    pub terms: Vec<Term>,
}

impl Atom {
    pub fn new(predicate: Predicate, terms: Vec<Term>) -> Self {
        Self { predicate, terms }
    }

    /// An atom with no arguments, e.g. `train` or `direction`.
    pub fn nullary(predicate: Predicate) -> Self {
        Self {
            predicate,
            terms: Vec::new(),
        }
    }

    /// A fact is an atom with no variables left in it.
    pub fn is_ground(&self) -> bool {
        self.terms.iter().all(Term::is_ground)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "{}", self.predicate);
        }
        write!(f, "{}(", self.predicate)?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{term}")?;
        }
        write!(f, ")")
    }
}

//! Rules and templates — the declarative half of a learning task.

use crate::logic::atom::Atom;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A body atom together with its minimum evidence count.
///
/// The learning framework derives a rule's head only once at least
/// `min_count` groundings of each body literal hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyLiteral {
    pub atom: Atom,
    pub min_count: u32,
}

impl BodyLiteral {
    pub fn new(atom: Atom, min_count: u32) -> Self {
        Self { atom, min_count }
    }

    /// The common single-evidence threshold.
    pub fn once(atom: Atom) -> Self {
        Self::new(atom, 1)
    }
}

impl fmt::Display for BodyLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.atom, self.min_count)
    }
}

/// An implication deriving a head atom from counted body literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub head: Atom,
    pub body: Vec<BodyLiteral>,
}

impl Rule {
    pub fn new(head: Atom, body: Vec<BodyLiteral>) -> Self {
        Self { head, body }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        if self.body.is_empty() {
            return Ok(());
        }
        write!(f, " :- ")?;
        for (i, literal) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{literal}")?;
        }
        Ok(())
    }
}

/// An ordered rule set, built once at startup and shared across all
/// examples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    rules: Vec<Rule>,
}

impl Template {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        self.rules.extend(rules);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

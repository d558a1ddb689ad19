//! Examples, queries, and the assembled dataset.

use crate::error::RelsetError;
use crate::logic::Atom;
use serde::{Deserialize, Serialize};

/// All facts describing one training instance.
///
/// Each example owns its own fact list, allocated independently of every
/// other example.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub facts: Vec<Atom>,
}

impl Example {
    pub fn new() -> Self {
        Self { facts: Vec::new() }
    }

    pub fn push(&mut self, fact: Atom) {
        self.facts.push(fact);
    }

    pub fn extend(&mut self, facts: impl IntoIterator<Item = Atom>) {
        self.facts.extend(facts);
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

/// The supervision target for one example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub atom: Atom,
    pub target: f64,
}

impl Query {
    pub fn new(atom: Atom, target: f64) -> Self {
        Self { atom, target }
    }
}

/// Examples plus matching queries, the artifact handed to the learning
/// framework alongside a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub examples: Vec<Example>,
    pub queries: Vec<Query>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_examples(&mut self, examples: impl IntoIterator<Item = Example>) {
        self.examples.extend(examples);
    }

    pub fn add_queries(&mut self, queries: impl IntoIterator<Item = Query>) {
        self.queries.extend(queries);
    }

    /// Total fact count across all examples.
    pub fn fact_count(&self) -> usize {
        self.examples.iter().map(Example::len).sum()
    }

    /// Check the example/query contract before handing the dataset off:
    /// queries and examples must pair up one to one, and no example may be
    /// empty.
    pub fn validate(&self) -> Result<(), RelsetError> {
        if self.examples.len() != self.queries.len() {
            return Err(RelsetError::dataset(format!(
                "{} examples but {} queries",
                self.examples.len(),
                self.queries.len()
            )));
        }
        if let Some(idx) = self.examples.iter().position(Example::is_empty) {
            return Err(RelsetError::dataset(format!(
                "example {idx} has no facts"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Predicate, Term};

    fn fact() -> Atom {
        Atom::new(Predicate::Wheels, vec![Term::Int(1), Term::Int(2)])
    }

    fn query() -> Query {
        Query::new(Atom::nullary(Predicate::Direction), 1.0)
    }

    #[test]
    fn test_validate_accepts_paired_nonempty() {
        let mut dataset = Dataset::new();
        let mut example = Example::new();
        example.push(fact());
        dataset.add_examples(vec![example]);
        dataset.add_queries(vec![query()]);
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.fact_count(), 1);
    }

    #[test]
    fn test_validate_rejects_count_mismatch() {
        let mut dataset = Dataset::new();
        let mut example = Example::new();
        example.push(fact());
        dataset.add_examples(vec![example]);
        assert!(matches!(
            dataset.validate(),
            Err(RelsetError::Dataset(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_example() {
        let mut dataset = Dataset::new();
        dataset.add_examples(vec![Example::new()]);
        dataset.add_queries(vec![query()]);
        assert!(matches!(
            dataset.validate(),
            Err(RelsetError::Dataset(_))
        ));
    }
}

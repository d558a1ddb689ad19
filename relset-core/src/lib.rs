//! # relset-core — relational dataset construction
//!
//! Builds the declarative artifacts a template-based relational learning
//! framework consumes: a [`Template`] of generalization rules, and a
//! [`Dataset`] of per-example fact groups paired with supervised queries.
//! Rule evaluation and learning happen downstream; this crate ends at the
//! constructed artifacts.
//!
//! The [`trains`] module ships the classic Michalski trains task: twenty
//! trains described car by car, labeled by travel direction.

pub mod config;
pub mod dataset;
pub mod error;
pub mod logic;
pub mod trains;

pub use config::TrainsConfig;
pub use dataset::{Dataset, Example, Query};
pub use error::RelsetError;
pub use logic::{Atom, BodyLiteral, Predicate, Rule, Template, Term};

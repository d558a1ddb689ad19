//! Logic layer — terms, atoms, rules, and templates.

pub mod atom;
pub mod rule;
pub mod term;

pub use atom::{Atom, Predicate};
pub use rule::{BodyLiteral, Rule, Template};
pub use term::Term;

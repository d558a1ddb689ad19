//! The Michalski trains task — source rows, template, and builders.
//!
//! One example per train; wagon order within a train is not encoded, only
//! which attributes hold at which position.

pub mod attributes;
pub mod builder;
pub mod data;
pub mod template;

pub use attributes::{Length, LoadShape, Roof, Shape, Sides};
pub use builder::{TrainsTask, build, build_examples, build_queries};
pub use data::{CarRecord, TRAIN_CARS};
pub use template::build_template;

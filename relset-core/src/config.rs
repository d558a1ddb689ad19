//! Configuration types for dataset construction.

use crate::error::RelsetError;
use serde::{Deserialize, Serialize};

/// Shape of the trains task: how many trains, and how many of them carry
/// the positive label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainsConfig {
    /// Number of trains, and therefore examples and queries.
    #[serde(default = "default_train_count")]
    pub train_count: usize,
    /// Trains `1..=positive_count` are labeled +1.0, the rest -1.0.
    #[serde(default = "default_positive_count")]
    pub positive_count: usize,
}

impl Default for TrainsConfig {
    fn default() -> Self {
        Self {
            train_count: default_train_count(),
            positive_count: default_positive_count(),
        }
    }
}

fn default_train_count() -> usize {
    20
}

fn default_positive_count() -> usize {
    10
}

impl TrainsConfig {
    /// Reject configurations that cannot produce a consistent query list.
    pub fn validate(&self) -> Result<(), RelsetError> {
        if self.positive_count > self.train_count {
            return Err(RelsetError::invalid_input(format!(
                "positive_count {} exceeds train_count {}",
                self.positive_count, self.train_count
            )));
        }
        Ok(())
    }
}

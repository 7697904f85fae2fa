use crate::core::mover::Strategy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub values: Vec<i64>,
}

impl From<Vec<i64>> for Sequence {
    fn from(values: Vec<i64>) -> Self {
        Self { values }
    }
}

/// Outcome of the transform phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub strategy: Strategy,
    pub input_len: usize,
    /// Number of zeros, all of which sit at the tail of `output`.
    pub zero_count: usize,
    pub output: Vec<i64>,
}

impl MoveReport {
    pub fn non_zero_count(&self) -> usize {
        self.input_len - self.zero_count
    }
}

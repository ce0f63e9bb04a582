//! Alternatives presented to the decision maker

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of an alternative
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct AlternativeId(pub usize);

impl fmt::Display for AlternativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alternative({})", self.0)
    }
}

impl From<usize> for AlternativeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// A candidate solution described by its objective evaluations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    id: AlternativeId,
    evaluations: Vec<f64>,
}

impl Alternative {
    /// Create a new alternative
    pub fn new(id: impl Into<AlternativeId>, evaluations: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            evaluations,
        }
    }

    /// Identifier
    pub fn id(&self) -> AlternativeId {
        self.id
    }

    /// Objective evaluations
    pub fn evaluations(&self) -> &[f64] {
        &self.evaluations
    }

    /// Number of objectives
    pub fn dimension(&self) -> usize {
        self.evaluations.len()
    }
}

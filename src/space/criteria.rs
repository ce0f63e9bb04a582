//! Criteria of a decision problem

use serde::{Deserialize, Serialize};

/// A single criterion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    /// Display name
    pub name: String,
    /// `true` when larger values are preferred
    pub gain: bool,
}

impl Criterion {
    /// Create a cost criterion (lower is better)
    pub fn cost(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gain: false,
        }
    }

    /// Create a gain criterion (higher is better)
    pub fn gain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gain: true,
        }
    }
}

/// Ordered list of criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    criteria: Vec<Criterion>,
}

impl Criteria {
    /// Create criteria from a list; `None` when the list is empty
    pub fn new(criteria: Vec<Criterion>) -> Option<Self> {
        (!criteria.is_empty()).then_some(Self { criteria })
    }

    /// `n` cost criteria named `f0`, `f1`, ...
    ///
    /// # Panics
    /// Panics if `n == 0`
    pub fn costs(n: usize) -> Self {
        assert!(n > 0, "At least one criterion is required");
        Self {
            criteria: (0..n).map(|i| Criterion::cost(format!("f{}", i))).collect(),
        }
    }

    /// Number of criteria
    pub fn dimension(&self) -> usize {
        self.criteria.len()
    }

    /// Criterion at `index`
    pub fn get(&self, index: usize) -> Option<&Criterion> {
        self.criteria.get(index)
    }

    /// Iterate over the criteria
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Per-criterion gain flags
    pub fn gains(&self) -> Vec<bool> {
        self.criteria.iter().map(|c| c.gain).collect()
    }
}

//! Alternative filters applied before a reference set is built

use serde::{Deserialize, Serialize};

use crate::space::alternative::Alternative;
use crate::space::objective_space::ObjectiveSpace;

/// Removes alternatives that should not be shown to the decision maker
pub trait AlternativeFilter {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Filter the alternatives, preserving the order of survivors
    fn filter(&self, alternatives: Vec<Alternative>) -> Vec<Alternative>;
}

/// Keeps only alternatives not Pareto-dominated by another one
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NonDominatedFilter {
    space: ObjectiveSpace,
}

impl NonDominatedFilter {
    /// Create a filter comparing alternatives in `space`
    pub fn new(space: ObjectiveSpace) -> Self {
        Self { space }
    }
}

impl AlternativeFilter for NonDominatedFilter {
    fn name(&self) -> &str {
        "non-dominated"
    }

    fn filter(&self, alternatives: Vec<Alternative>) -> Vec<Alternative> {
        let dominated: Vec<bool> = alternatives
            .iter()
            .map(|a| {
                alternatives
                    .iter()
                    .any(|b| self.space.dominates(b.evaluations(), a.evaluations()))
            })
            .collect();

        alternatives
            .into_iter()
            .zip(dominated)
            .filter_map(|(a, d)| (!d).then_some(a))
            .collect()
    }
}

/// Drops alternatives whose evaluations repeat an earlier one
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DuplicateFilter {
    /// Per-objective absolute tolerance
    pub tolerance: f64,
}

impl DuplicateFilter {
    /// Exact-match duplicate filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat evaluations within `tolerance` as equal
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    fn same(&self, a: &Alternative, b: &Alternative) -> bool {
        a.dimension() == b.dimension()
            && a
                .evaluations()
                .iter()
                .zip(b.evaluations())
                .all(|(x, y)| (x - y).abs() <= self.tolerance)
    }
}

impl AlternativeFilter for DuplicateFilter {
    fn name(&self) -> &str {
        "duplicates"
    }

    fn filter(&self, alternatives: Vec<Alternative>) -> Vec<Alternative> {
        let mut kept: Vec<Alternative> = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            if !kept.iter().any(|k| self.same(k, &alternative)) {
                kept.push(alternative);
            }
        }
        kept
    }
}

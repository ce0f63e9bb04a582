//! Alternative reduction
//!
//! Runs the configured filters in order and checks that enough alternatives
//! survive for every reference-set constructor that will draw from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::constructor::ReferenceSetConstructor;
use super::filter::AlternativeFilter;
use crate::space::alternative::Alternative;

/// Status of a reduction run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReductionStatus {
    /// Enough alternatives remained
    Processed,
    /// Fewer alternatives than required remained
    TerminatedDueToInsufficientAlternatives,
}

impl fmt::Display for ReductionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processed => write!(f, "processed"),
            Self::TerminatedDueToInsufficientAlternatives => {
                write!(f, "terminated due to insufficient alternatives")
            }
        }
    }
}

/// Result of [`AlternativeReduction::reduce`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReductionResult {
    /// Outcome
    pub status: ReductionStatus,
    /// Surviving alternatives (kept even on termination)
    pub alternatives: Vec<Alternative>,
    /// Explanation when terminated
    pub message: Option<String>,
}

impl ReductionResult {
    /// `true` when enough alternatives remained
    pub fn is_processed(&self) -> bool {
        self.status == ReductionStatus::Processed
    }
}

/// Filter pipeline with a minimum-survivor requirement
pub struct AlternativeReduction {
    filters: Vec<Box<dyn AlternativeFilter>>,
    required: usize,
}

impl AlternativeReduction {
    /// Create a reduction requiring at least `required` survivors
    pub fn new(required: usize) -> Self {
        Self {
            filters: Vec::new(),
            required,
        }
    }

    /// Require as many alternatives as the most demanding constructor expects
    pub fn for_constructors<'a, C, I>(constructors: I) -> Self
    where
        C: ReferenceSetConstructor + 'a,
        I: IntoIterator<Item = &'a C>,
    {
        let required = constructors
            .into_iter()
            .map(ReferenceSetConstructor::expected_size)
            .max()
            .unwrap_or(0);
        Self::new(required)
    }

    /// Append a filter to the pipeline
    pub fn with_filter<F: AlternativeFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Override the required survivor count
    pub fn with_required(mut self, required: usize) -> Self {
        self.required = required;
        self
    }

    /// Required survivor count
    pub fn required(&self) -> usize {
        self.required
    }

    /// Run every filter and check the survivor count
    pub fn reduce(&self, alternatives: Vec<Alternative>) -> ReductionResult {
        let mut remaining = alternatives;
        for filter in &self.filters {
            let before = remaining.len();
            remaining = filter.filter(remaining);
            tracing::trace!(
                filter = filter.name(),
                before,
                after = remaining.len(),
                "applied alternative filter"
            );
        }

        if remaining.len() < self.required {
            let message = format!(
                "required = {} but {} remained after reduction",
                self.required,
                remaining.len()
            );
            tracing::warn!(required = self.required, remaining = remaining.len(), "{}", message);
            return ReductionResult {
                status: ReductionStatus::TerminatedDueToInsufficientAlternatives,
                alternatives: remaining,
                message: Some(message),
            };
        }

        ReductionResult {
            status: ReductionStatus::Processed,
            alternatives: remaining,
            message: None,
        }
    }
}

impl fmt::Debug for AlternativeReduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.filters.iter().map(|f| f.name()).collect();
        f.debug_struct("AlternativeReduction")
            .field("filters", &names)
            .field("required", &self.required)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::constructor::RandomReferenceSet;
    use crate::reference::filter::{DuplicateFilter, NonDominatedFilter};
    use crate::space::objective_space::ObjectiveSpace;

    fn front(n: usize) -> Vec<Alternative> {
        (0..n)
            .map(|i| {
                let x = i as f64 / n as f64;
                Alternative::new(i, vec![x, 1.0 - x])
            })
            .collect()
    }

    #[test]
    fn test_required_from_constructors() {
        let constructors = vec![RandomReferenceSet::new(2), RandomReferenceSet::new(6)];
        let reduction = AlternativeReduction::for_constructors(&constructors);
        assert_eq!(reduction.required(), 6);
    }

    #[test]
    fn test_processed() {
        let reduction = AlternativeReduction::new(3)
            .with_filter(DuplicateFilter::new())
            .with_filter(NonDominatedFilter::new(ObjectiveSpace::unit(2)));

        let result = reduction.reduce(front(5));
        assert!(result.is_processed());
        assert_eq!(result.alternatives.len(), 5);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_insufficient_alternatives_message() {
        let mut alternatives = front(5);
        // Dominated by everything on the front
        alternatives.extend((5..20).map(|i| Alternative::new(i, vec![2.0, 2.0])));

        let reduction = AlternativeReduction::new(100)
            .with_filter(NonDominatedFilter::new(ObjectiveSpace::uniform(
                (0.0, 2.0).into(),
                2,
            )));

        let result = reduction.reduce(alternatives);
        assert_eq!(
            result.status,
            ReductionStatus::TerminatedDueToInsufficientAlternatives
        );
        assert_eq!(result.alternatives.len(), 5);
        assert_eq!(
            result.message.as_deref(),
            Some("required = 100 but 5 remained after reduction")
        );
    }
}

//! Objective space and normalization
//!
//! An [`ObjectiveSpace`] fixes how raw evaluations are mapped onto the unit
//! hypercube before a preference model looks at them. Two spaces that compare
//! equal normalize identically, which is what the model constructor relies on
//! when deciding whether previously accepted models can be kept.

use serde::{Deserialize, Serialize};

use super::alternative::Alternative;
use super::bounds::Bounds;
use super::criteria::Criteria;

/// Per-objective bounds plus optimization direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveSpace {
    bounds: Vec<Bounds>,
    gains: Vec<bool>,
}

impl ObjectiveSpace {
    /// Create a space where every objective is minimized
    pub fn new(bounds: Vec<Bounds>) -> Self {
        let gains = vec![false; bounds.len()];
        Self { bounds, gains }
    }

    /// Create uniform bounds for all objectives
    pub fn uniform(bound: Bounds, dimension: usize) -> Self {
        Self::new(vec![bound; dimension])
    }

    /// Unit bounds in every objective
    pub fn unit(dimension: usize) -> Self {
        Self::uniform(Bounds::unit(), dimension)
    }

    /// Tightest bounds covering all given alternatives
    ///
    /// Returns `None` when `alternatives` is empty or dimensions differ.
    pub fn from_alternatives(alternatives: &[Alternative]) -> Option<Self> {
        let first = alternatives.first()?;
        let mut bounds: Vec<Bounds> = first
            .evaluations()
            .iter()
            .map(|&v| Bounds { min: v, max: v })
            .collect();

        for alternative in &alternatives[1..] {
            if alternative.dimension() != bounds.len() {
                return None;
            }
            for (b, &v) in bounds.iter_mut().zip(alternative.evaluations()) {
                *b = b.extend(v);
            }
        }
        Some(Self::new(bounds))
    }

    /// Orient objectives according to the criteria gain flags
    ///
    /// Extra criteria (or extra objectives) are ignored; dimension agreement is
    /// checked when a decision context is registered.
    pub fn with_criteria(mut self, criteria: &Criteria) -> Self {
        for (gain, criterion) in self.gains.iter_mut().zip(criteria.iter()) {
            *gain = criterion.gain;
        }
        self
    }

    /// Number of objectives
    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }

    /// Bounds of each objective
    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    /// Normalize a single value of objective `index` into cost space [0, 1]
    ///
    /// Gain objectives are flipped so that lower is always better.
    pub fn normalize_value(&self, index: usize, value: f64) -> f64 {
        match self.bounds.get(index) {
            Some(b) => {
                let n = b.normalize(value);
                if self.gains.get(index).copied().unwrap_or(false) {
                    1.0 - n
                } else {
                    n
                }
            }
            None => value,
        }
    }

    /// Normalize an evaluation vector into cost space
    pub fn normalize(&self, point: &[f64]) -> Vec<f64> {
        point
            .iter()
            .enumerate()
            .map(|(i, &v)| self.normalize_value(i, v))
            .collect()
    }

    /// Check whether `a` Pareto-dominates `b` (in cost space)
    pub fn dominates(&self, a: &[f64], b: &[f64]) -> bool {
        let na = self.normalize(a);
        let nb = self.normalize(b);
        let at_least_as_good = na.iter().zip(nb.iter()).all(|(x, y)| x <= y);
        let strictly_better = na.iter().zip(nb.iter()).any(|(x, y)| x < y);
        at_least_as_good && strictly_better
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::criteria::Criterion;

    #[test]
    fn test_normalize_cost() {
        let space = ObjectiveSpace::new(vec![Bounds::new(0.0, 10.0), Bounds::new(-1.0, 1.0)]);
        assert_eq!(space.normalize(&[5.0, 0.0]), vec![0.5, 0.5]);
        assert_eq!(space.normalize(&[0.0, 1.0]), vec![0.0, 1.0]);
    }

    #[test]
    fn test_normalize_gain_is_flipped() {
        let criteria =
            Criteria::new(vec![Criterion::cost("cost"), Criterion::gain("quality")]).unwrap();
        let space = ObjectiveSpace::unit(2).with_criteria(&criteria);
        assert_eq!(space.normalize(&[0.25, 0.25]), vec![0.25, 0.75]);
    }

    #[test]
    fn test_from_alternatives() {
        let alternatives = vec![
            Alternative::new(0, vec![1.0, 5.0]),
            Alternative::new(1, vec![3.0, 2.0]),
            Alternative::new(2, vec![2.0, 4.0]),
        ];
        let space = ObjectiveSpace::from_alternatives(&alternatives).unwrap();
        assert_eq!(
            space.bounds(),
            &[Bounds::new(1.0, 3.0), Bounds::new(2.0, 5.0)]
        );
    }

    #[test]
    fn test_from_alternatives_rejects_mixed_dimensions() {
        let alternatives = vec![
            Alternative::new(0, vec![1.0, 5.0]),
            Alternative::new(1, vec![3.0]),
        ];
        assert!(ObjectiveSpace::from_alternatives(&alternatives).is_none());
        assert!(ObjectiveSpace::from_alternatives(&[]).is_none());
    }

    #[test]
    fn test_value_equality_is_identity() {
        let a = ObjectiveSpace::unit(2);
        let b = ObjectiveSpace::uniform(Bounds::new(0.0, 1.0), 2);
        let c = ObjectiveSpace::uniform(Bounds::new(0.0, 2.0), 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_dominates() {
        let space = ObjectiveSpace::unit(2);
        assert!(space.dominates(&[0.1, 0.2], &[0.2, 0.2]));
        assert!(!space.dominates(&[0.1, 0.3], &[0.2, 0.2]));
        assert!(!space.dominates(&[0.2, 0.2], &[0.2, 0.2]));
    }
}

//! Weight vector samplers
//!
//! Uniform sampling over the unit simplex is done by normalizing independent
//! `Exp(1)` draws, which yields a flat Dirichlet(1, ..., 1) distribution.

use rand::Rng;
use rand_distr::Exp1;
use serde::{Deserialize, Serialize};

/// Uniform sampler over the unit weight simplex
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplexWeightSampler {
    /// Lower bound enforced on every weight
    min_weight: f64,
}

impl SimplexWeightSampler {
    /// Create a sampler over the full simplex
    pub fn new() -> Self {
        Self { min_weight: 0.0 }
    }

    /// Require every weight to be at least `min_weight`
    ///
    /// The floor is clamped to [0, 1]; for a given dimension `d` it is further
    /// capped at `1 / d` when sampling so the weights still sum to one.
    pub fn with_min_weight(mut self, min_weight: f64) -> Self {
        self.min_weight = min_weight.clamp(0.0, 1.0);
        self
    }

    /// Configured weight floor
    pub fn min_weight(&self) -> f64 {
        self.min_weight
    }

    /// Draw a weight vector of the given dimension
    pub fn sample_weights<R: Rng>(&self, dimension: usize, rng: &mut R) -> Vec<f64> {
        if dimension == 0 {
            return Vec::new();
        }

        let draws: Vec<f64> = (0..dimension).map(|_| rng.sample::<f64, _>(Exp1)).collect();
        let total: f64 = draws.iter().sum();

        let simplex: Vec<f64> = if total > 0.0 {
            draws.iter().map(|x| x / total).collect()
        } else {
            vec![1.0 / dimension as f64; dimension]
        };

        let floor = self.min_weight.min(1.0 / dimension as f64);
        if floor <= 0.0 {
            return simplex;
        }
        let scale = 1.0 - floor * dimension as f64;
        simplex.iter().map(|w| floor + scale * w).collect()
    }
}

impl Default for SimplexWeightSampler {
    fn default() -> Self {
        Self::new()
    }
}

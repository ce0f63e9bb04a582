//! Weighted scalarizing functions as a preference model family
//!
//! Each model instance is a weight vector paired with a scalarizing kind. An
//! instance maps an evaluation vector (normalized into cost space by the
//! objective space) to a single value where lower is better. A preference
//! statement "A over B" is satisfied when the instance scores A strictly below
//! B.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::sampler::SimplexWeightSampler;
use super::traits::{InstanceSampler, PreferenceModel};
use crate::history::statement::{PairwiseComparison, Relation};
use crate::space::objective_space::ObjectiveSpace;

/// Default tolerance for indifference statements, in normalized units
pub const DEFAULT_INDIFFERENCE_TOLERANCE: f64 = 0.05;

/// Kind of scalarization applied to the weighted, normalized objectives
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScalarizingKind {
    /// `sum(w_i * x_i)`
    WeightedSum,
    /// `max(w_i * x_i)`
    Chebyshev,
    /// `max(w_i * x_i) + rho * sum(w_i * x_i)`
    AugmentedChebyshev {
        /// Augmentation coefficient
        rho: f64,
    },
}

impl Default for ScalarizingKind {
    fn default() -> Self {
        Self::Chebyshev
    }
}

/// One parametrized scalarizing function
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarizingFunction {
    weights: Vec<f64>,
    kind: ScalarizingKind,
}

impl ScalarizingFunction {
    /// Create a function from weights and a kind
    pub fn new(weights: Vec<f64>, kind: ScalarizingKind) -> Self {
        Self { weights, kind }
    }

    /// Weighted sum function
    pub fn weighted_sum(weights: Vec<f64>) -> Self {
        Self::new(weights, ScalarizingKind::WeightedSum)
    }

    /// Weighted Chebyshev function
    pub fn chebyshev(weights: Vec<f64>) -> Self {
        Self::new(weights, ScalarizingKind::Chebyshev)
    }

    /// Weight vector
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Scalarization kind
    pub fn kind(&self) -> ScalarizingKind {
        self.kind
    }

    /// Score an evaluation vector (lower is better)
    pub fn evaluate(&self, point: &[f64], space: &ObjectiveSpace) -> f64 {
        let weighted = space
            .normalize(point)
            .into_iter()
            .zip(self.weights.iter())
            .map(|(x, w)| w * x);

        match self.kind {
            ScalarizingKind::WeightedSum => weighted.sum(),
            ScalarizingKind::Chebyshev => weighted.fold(f64::NEG_INFINITY, f64::max),
            ScalarizingKind::AugmentedChebyshev { rho } => {
                let (max, sum) = weighted.fold((f64::NEG_INFINITY, 0.0), |(m, s), v| {
                    (m.max(v), s + v)
                });
                max + rho * sum
            }
        }
    }
}

/// Sampler producing scalarizing functions with simplex weights
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarizingSampler {
    weights: SimplexWeightSampler,
    kind: ScalarizingKind,
}

impl ScalarizingSampler {
    /// Create a sampler for the given kind
    pub fn new(kind: ScalarizingKind, weights: SimplexWeightSampler) -> Self {
        Self { weights, kind }
    }
}

impl InstanceSampler<ScalarizingFunction> for ScalarizingSampler {
    fn sample<R: Rng>(&self, space: &ObjectiveSpace, rng: &mut R) -> ScalarizingFunction {
        let weights = self.weights.sample_weights(space.dimension(), rng);
        ScalarizingFunction::new(weights, self.kind)
    }
}

/// Preference model whose instances are weighted scalarizing functions
#[derive(Clone, Debug)]
pub struct ScalarizingModel {
    sampler: ScalarizingSampler,
    indifference_tolerance: f64,
    population: Option<Vec<ScalarizingFunction>>,
}

impl ScalarizingModel {
    /// Create a model of the given kind with uniform simplex weights
    pub fn new(kind: ScalarizingKind) -> Self {
        Self {
            sampler: ScalarizingSampler::new(kind, SimplexWeightSampler::new()),
            indifference_tolerance: DEFAULT_INDIFFERENCE_TOLERANCE,
            population: None,
        }
    }

    /// Model with weighted Chebyshev instances
    pub fn chebyshev() -> Self {
        Self::new(ScalarizingKind::Chebyshev)
    }

    /// Model with weighted sum instances
    pub fn weighted_sum() -> Self {
        Self::new(ScalarizingKind::WeightedSum)
    }

    /// Use a custom weight sampler
    pub fn with_weight_sampler(mut self, weights: SimplexWeightSampler) -> Self {
        self.sampler = ScalarizingSampler::new(self.sampler.kind, weights);
        self
    }

    /// Set the tolerance used for indifference statements
    pub fn with_indifference_tolerance(mut self, tolerance: f64) -> Self {
        self.indifference_tolerance = tolerance.max(0.0);
        self
    }

    /// Tolerance used for indifference statements
    pub fn indifference_tolerance(&self) -> f64 {
        self.indifference_tolerance
    }
}

impl PreferenceModel for ScalarizingModel {
    type Instance = ScalarizingFunction;
    type Sampler = ScalarizingSampler;

    fn name(&self) -> &str {
        match self.sampler.kind {
            ScalarizingKind::WeightedSum => "weighted-sum",
            ScalarizingKind::Chebyshev => "chebyshev",
            ScalarizingKind::AugmentedChebyshev { .. } => "augmented-chebyshev",
        }
    }

    fn is_feasible(
        &self,
        instance: &ScalarizingFunction,
        statement: &PairwiseComparison,
        space: &ObjectiveSpace,
    ) -> bool {
        let first = instance.evaluate(statement.first().evaluations(), space);
        let second = instance.evaluate(statement.second().evaluations(), space);
        match statement.relation() {
            Relation::Preference => first < second,
            Relation::Indifference => (first - second).abs() <= self.indifference_tolerance,
        }
    }

    fn sampler(&self) -> &ScalarizingSampler {
        &self.sampler
    }

    fn current_population(&self) -> Option<&[ScalarizingFunction]> {
        self.population.as_deref()
    }

    fn replace_population(&mut self, population: Option<Vec<ScalarizingFunction>>) {
        self.population = population;
    }
}

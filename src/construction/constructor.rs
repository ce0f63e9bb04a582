//! Model constructors
//!
//! A constructor turns the current evidence into a population of feasible
//! model instances. [`RejectionSampling`] keeps previously accepted instances
//! that still satisfy every statement and refills the rest by drawing fresh
//! instances from the model's sampler, rejecting those that violate any
//! statement. When the attempt ceiling is exhausted before the population is
//! full the report is flagged as inconsistent; that flag is what inconsistency
//! handling reacts to.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::report::ConstructionReport;
use crate::error::ConfigurationError;
use crate::history::entry::HistoryEntry;
use crate::history::statement::PairwiseComparison;
use crate::model::traits::{InstanceSampler, PreferenceModel};
use crate::space::objective_space::ObjectiveSpace;
use crate::system::config::SystemConfig;

/// Inputs of one construction attempt
pub struct ConstructionInput<'a, M: PreferenceModel> {
    /// Model family providing feasibility tests and the sampler
    pub model: &'a M,
    /// Evidence the population must satisfy (oldest first)
    pub evidence: &'a [HistoryEntry],
    /// Population accepted by the previous successful update
    pub previous_population: Option<&'a [M::Instance]>,
    /// Objective space for this attempt
    pub objective_space: &'a ObjectiveSpace,
    /// Objective space the previous population was built in
    pub previous_objective_space: Option<&'a ObjectiveSpace>,
}

impl<'a, M: PreferenceModel> ConstructionInput<'a, M> {
    /// Same inputs with a different evidence slice
    pub fn with_evidence(self, evidence: &'a [HistoryEntry]) -> Self {
        Self { evidence, ..self }
    }
}

impl<M: PreferenceModel> Clone for ConstructionInput<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: PreferenceModel> Copy for ConstructionInput<'_, M> {}

/// Builds a population of model instances consistent with the evidence
pub trait ModelConstructor<M: PreferenceModel> {
    /// Number of instances a consistent construction produces
    fn population_size(&self) -> usize;

    /// Check that the parameters can ever produce a population
    fn validate(&self) -> Result<(), ConfigurationError> {
        Ok(())
    }

    /// Run one construction attempt
    fn construct<R: Rng>(
        &self,
        input: ConstructionInput<'_, M>,
        rng: &mut R,
    ) -> ConstructionReport<M::Instance>;
}

/// Rejection-sampling model constructor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionSampling {
    population_size: usize,
    max_sampling_attempts: usize,
}

impl RejectionSampling {
    /// Create a constructor producing `population_size` instances with at most
    /// `max_sampling_attempts` fresh draws per attempt
    pub fn new(population_size: usize, max_sampling_attempts: usize) -> Self {
        Self {
            population_size,
            max_sampling_attempts,
        }
    }

    /// Create a constructor from the system configuration
    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(config.population_size, config.max_sampling_attempts)
    }

    /// Fresh-sample ceiling per attempt
    pub fn max_sampling_attempts(&self) -> usize {
        self.max_sampling_attempts
    }
}

impl Default for RejectionSampling {
    fn default() -> Self {
        Self::from_config(&SystemConfig::default())
    }
}

impl<M: PreferenceModel> ModelConstructor<M> for RejectionSampling {
    fn population_size(&self) -> usize {
        self.population_size
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.population_size == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "population_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_sampling_attempts < self.population_size {
            return Err(ConfigurationError::InvalidValue {
                field: "max_sampling_attempts",
                reason: format!(
                    "must be at least the population size ({}), got {}",
                    self.population_size, self.max_sampling_attempts
                ),
            });
        }
        Ok(())
    }

    fn construct<R: Rng>(
        &self,
        input: ConstructionInput<'_, M>,
        rng: &mut R,
    ) -> ConstructionReport<M::Instance> {
        let start = Instant::now();
        let model = input.model;
        let space = input.objective_space;
        let statements: Vec<&PairwiseComparison> =
            input.evidence.iter().map(HistoryEntry::statement).collect();

        let normalization_updated = match (input.previous_population, input.previous_objective_space)
        {
            (Some(_), Some(previous_space)) => previous_space != space,
            _ => true,
        };

        let mut models: Vec<M::Instance> = Vec::with_capacity(self.population_size);
        let mut preserved = 0;
        let mut rejected_between_iterations = 0;

        // Carry over instances that still fit when normalization is unchanged
        if !normalization_updated {
            if let Some(previous) = input.previous_population {
                for instance in previous {
                    if models.len() == self.population_size {
                        break;
                    }
                    if model.is_feasible_for_all(instance, statements.iter().copied(), space) {
                        models.push(instance.clone());
                        preserved += 1;
                    } else {
                        rejected_between_iterations += 1;
                    }
                }
            }
        }

        let mut accepted_new = 0;
        let mut rejected_new = 0;
        let mut attempts = 0;
        let mut inconsistency_detected = false;

        while models.len() < self.population_size {
            if attempts >= self.max_sampling_attempts {
                inconsistency_detected = true;
                break;
            }
            attempts += 1;

            let candidate = model.sampler().sample(space, rng);
            if model.is_feasible_for_all(&candidate, statements.iter().copied(), space) {
                models.push(candidate);
                accepted_new += 1;
            } else {
                rejected_new += 1;
            }
        }

        let report = ConstructionReport {
            inconsistency_detected,
            models: if inconsistency_detected {
                None
            } else {
                Some(models)
            },
            expected_population_size: self.population_size,
            evidence_size: statements.len(),
            accepted_new,
            rejected_new,
            preserved,
            rejected_between_iterations,
            normalization_updated,
            elapsed: start.elapsed(),
        };

        tracing::debug!(
            model = model.name(),
            evidence = report.evidence_size,
            preserved = report.preserved,
            rejected_between = report.rejected_between_iterations,
            accepted_new = report.accepted_new,
            rejected_new = report.rejected_new,
            normalization_updated,
            inconsistent = inconsistency_detected,
            "model construction finished"
        );

        report
    }
}

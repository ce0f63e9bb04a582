//! Decision-making context
//!
//! The context is the snapshot a caller registers at the start of each
//! iteration: iteration number, criteria, objective-space bounds and the
//! random source every sampling step of the iteration draws from.

use rand::rngs::StdRng;

use crate::error::ConfigurationError;
use crate::space::criteria::Criteria;
use crate::space::objective_space::ObjectiveSpace;

/// Snapshot of the decision-making situation for one update cycle
#[derive(Clone, Debug)]
pub struct DecisionContext {
    iteration: usize,
    criteria: Option<Criteria>,
    objective_space: Option<ObjectiveSpace>,
    rng: StdRng,
}

impl DecisionContext {
    /// Create a complete context
    ///
    /// The objective space is oriented according to the criteria gain flags.
    pub fn new(
        iteration: usize,
        criteria: Criteria,
        objective_space: ObjectiveSpace,
        rng: StdRng,
    ) -> Self {
        Self::empty(iteration, rng)
            .with_criteria(criteria)
            .with_objective_space(objective_space)
    }

    /// Create a context with only an iteration and a random source
    pub fn empty(iteration: usize, rng: StdRng) -> Self {
        Self {
            iteration,
            criteria: None,
            objective_space: None,
            rng,
        }
    }

    /// Set the criteria
    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = Some(criteria);
        self.orient();
        self
    }

    /// Set the objective space
    pub fn with_objective_space(mut self, objective_space: ObjectiveSpace) -> Self {
        self.objective_space = Some(objective_space);
        self.orient();
        self
    }

    fn orient(&mut self) {
        if let (Some(criteria), Some(space)) = (&self.criteria, &mut self.objective_space) {
            *space = space.clone().with_criteria(criteria);
        }
    }

    /// Iteration number
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Criteria, if provided
    pub fn criteria(&self) -> Option<&Criteria> {
        self.criteria.as_ref()
    }

    /// Objective space, if provided
    pub fn objective_space(&self) -> Option<&ObjectiveSpace> {
        self.objective_space.as_ref()
    }

    /// Random source for this iteration
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Check that the context carries criteria and matching objective bounds
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let criteria = self
            .criteria
            .as_ref()
            .ok_or(ConfigurationError::MissingCriteria)?;
        let space = self
            .objective_space
            .as_ref()
            .ok_or(ConfigurationError::MissingObjectiveSpace)?;
        if criteria.dimension() != space.dimension() {
            return Err(ConfigurationError::DimensionMismatch {
                criteria: criteria.dimension(),
                objectives: space.dimension(),
            });
        }
        Ok(())
    }
}

//! Reference set constructors
//!
//! A reference set is the handful of alternatives shown to the decision maker
//! in one elicitation round.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::space::alternative::Alternative;

/// Picks the alternatives presented to the decision maker
pub trait ReferenceSetConstructor {
    /// Number of alternatives this constructor needs to work with
    fn expected_size(&self) -> usize;

    /// Build a reference set from the (already reduced) alternatives
    fn construct<R: Rng>(&self, alternatives: &[Alternative], rng: &mut R) -> Vec<Alternative>;
}

/// Uniformly random subset without replacement
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomReferenceSet {
    size: usize,
}

impl RandomReferenceSet {
    /// Create a constructor selecting `size` alternatives
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Default for RandomReferenceSet {
    fn default() -> Self {
        Self::new(2)
    }
}

impl ReferenceSetConstructor for RandomReferenceSet {
    fn expected_size(&self) -> usize {
        self.size
    }

    fn construct<R: Rng>(&self, alternatives: &[Alternative], rng: &mut R) -> Vec<Alternative> {
        alternatives
            .choose_multiple(rng, self.size.min(alternatives.len()))
            .cloned()
            .collect()
    }
}

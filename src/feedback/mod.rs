//! Feedback providers
//!
//! A feedback provider answers a reference set with pairwise statements. In a
//! live session this is a human behind some user interface; for testing and
//! benchmarking, [`ArtificialDecisionMaker`] answers according to a hidden
//! scalarizing function.

pub mod artificial;

pub use artificial::ArtificialDecisionMaker;

use crate::error::HistoryError;
use crate::history::statement::PairwiseComparison;
use crate::space::alternative::Alternative;

/// Source of preference statements over a reference set
pub trait FeedbackProvider {
    /// Compare the alternatives of one reference set
    fn compare(
        &mut self,
        reference_set: &[Alternative],
    ) -> Result<Vec<PairwiseComparison>, HistoryError>;
}

pub mod prelude {
    pub use super::artificial::*;
    pub use super::FeedbackProvider;
}

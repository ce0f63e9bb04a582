//! # dm-model
//!
//! Preference-model construction for interactive multi-criteria optimization.
//!
//! Across iterations a decision maker compares candidate solutions. This crate
//! keeps those statements, builds a population of preference-model instances
//! consistent with all of them, and recovers deterministically when the
//! statements contradict each other by pruning the oldest removable evidence
//! until a consistent population can be built again.
//!
//! ## Core Concepts
//!
//! - **History**: ordered log of pairwise statements, each stamped with the
//!   iteration it was registered in
//! - **Preference model**: a family of instances (e.g. weighted Chebyshev
//!   functions) that can be tested against a statement
//! - **Rejection sampling**: keep still-compatible instances, sample fresh ones
//!   until the population is full or the attempt ceiling is hit
//! - **Inconsistency handling**: drop the oldest removable statement and retry
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dm_model::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut system = ModelSystem::with_config(
//!     ScalarizingModel::chebyshev(),
//!     &SystemConfig::default().population_size(20),
//! )?;
//!
//! let rng = rand::rngs::StdRng::seed_from_u64(42);
//! system.register_decision_making_context(DecisionContext::new(
//!     0,
//!     Criteria::costs(2),
//!     ObjectiveSpace::unit(2),
//!     rng,
//! ))?;
//!
//! system.notify_preference_elicitation_begins()?;
//! system.notify_about_most_recent_preference_information(statements)?;
//! system.notify_preference_elicitation_ends()?;
//!
//! let report = system.update_model()?;
//! println!("{}", report);
//! ```

pub mod construction;
pub mod error;
pub mod feedback;
pub mod history;
pub mod inconsistency;
pub mod model;
pub mod reference;
pub mod space;
pub mod system;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::construction::prelude::*;
    pub use crate::error::*;
    pub use crate::feedback::prelude::*;
    pub use crate::history::prelude::*;
    pub use crate::inconsistency::prelude::*;
    pub use crate::model::prelude::*;
    pub use crate::reference::prelude::*;
    pub use crate::space::prelude::*;
    pub use crate::system::prelude::*;
}

//! Inconsistency handling
//!
//! This module provides the [`InconsistencyHandler`] trait, the remove-oldest
//! strategy and the per-attempt trace it produces.

pub mod handler;
pub mod state;

pub use handler::{InconsistencyHandler, RemoveOldest, ResolutionInput};
pub use state::{InconsistencyReport, State};

pub mod prelude {
    pub use super::handler::*;
    pub use super::state::*;
}

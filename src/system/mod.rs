//! Model system
//!
//! This module provides the orchestrator that ties the history, a preference
//! model, a model constructor and an inconsistency handler together, plus the
//! decision context, configuration and per-update report it works with.

pub mod config;
pub mod context;
pub mod model_system;
pub mod report;

pub use config::{HandlingVariant, SystemConfig};
pub use context::DecisionContext;
pub use model_system::{ElicitedPreference, ModelSystem, ModelSystemBuilder, SystemState};
pub use report::{Report, UpdateOutcome};

pub mod prelude {
    pub use super::config::*;
    pub use super::context::*;
    pub use super::model_system::*;
    pub use super::report::*;
}

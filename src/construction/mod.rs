//! Model construction
//!
//! This module provides the [`ModelConstructor`](constructor::ModelConstructor)
//! trait, the rejection-sampling implementation and its statistics report.

pub mod constructor;
pub mod report;

pub use constructor::{ConstructionInput, ModelConstructor, RejectionSampling};
pub use report::ConstructionReport;

pub mod prelude {
    pub use super::constructor::*;
    pub use super::report::*;
}

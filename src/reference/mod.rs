//! Reference sets
//!
//! This module provides the narrow interface the model system expects from
//! the pipeline that turns candidate solutions into questions for the
//! decision maker: filters, a minimum-survivor check and reference-set
//! constructors.

pub mod constructor;
pub mod filter;
pub mod reduction;

pub use constructor::{RandomReferenceSet, ReferenceSetConstructor};
pub use filter::{AlternativeFilter, DuplicateFilter, NonDominatedFilter};
pub use reduction::{AlternativeReduction, ReductionResult, ReductionStatus};

pub mod prelude {
    pub use super::constructor::*;
    pub use super::filter::*;
    pub use super::reduction::*;
}

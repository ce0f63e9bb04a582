//! Preference models
//!
//! This module provides the [`PreferenceModel`](traits::PreferenceModel)
//! contract and the weighted scalarizing function family.

pub mod sampler;
pub mod scalarizing;
pub mod traits;

pub mod prelude {
    pub use super::sampler::*;
    pub use super::scalarizing::*;
    pub use super::traits::*;
}

//! Objective space, criteria and alternatives
//!
//! This module provides the value types a decision context is made of.

pub mod alternative;
pub mod bounds;
pub mod criteria;
pub mod objective_space;

pub mod prelude {
    pub use super::alternative::*;
    pub use super::bounds::*;
    pub use super::criteria::*;
    pub use super::objective_space::*;
}

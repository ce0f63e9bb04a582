//! Preference history
//!
//! This module provides the ordered evidence log: pairwise statements wrapped
//! in entries that remember when they were registered and whether they may be
//! pruned automatically.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod history;
pub mod statement;

pub use entry::{EntryId, HistoryEntry};
pub use history::History;
pub use statement::{PairwiseComparison, Relation};

pub mod prelude {
    pub use super::entry::*;
    pub use super::history::*;
    pub use super::statement::*;
}

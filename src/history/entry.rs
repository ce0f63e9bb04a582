//! History entries

use serde::{Deserialize, Serialize};
use std::fmt;

use super::statement::PairwiseComparison;

/// Sequence number of a history entry
///
/// Assigned by [`History`](super::History) in insertion order, so a smaller id
/// always means an older entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({})", self.0)
    }
}

/// A preference statement stamped with the iteration it was registered in
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: EntryId,
    statement: PairwiseComparison,
    iteration: usize,
    removable: bool,
}

impl HistoryEntry {
    pub(crate) fn new(
        id: EntryId,
        statement: PairwiseComparison,
        iteration: usize,
        removable: bool,
    ) -> Self {
        Self {
            id,
            statement,
            iteration,
            removable,
        }
    }

    /// Sequence number
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// The wrapped statement
    pub fn statement(&self) -> &PairwiseComparison {
        &self.statement
    }

    /// Iteration in which the statement was registered
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Whether inconsistency handling may prune this entry
    pub fn is_removable(&self) -> bool {
        self.removable
    }
}

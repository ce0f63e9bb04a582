//! Inconsistency handling trace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::construction::report::ConstructionReport;
use crate::history::entry::{EntryId, HistoryEntry};

/// One attempt inside an inconsistency recovery sequence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "I: Serialize + for<'a> Deserialize<'a>")]
pub struct State<I> {
    /// Attempt index (0 = the full, unpruned evidence)
    pub index: usize,
    /// Working copy of the evidence used by this attempt
    pub evidence: Vec<HistoryEntry>,
    /// Entries pruned so far, oldest first
    pub removed: Vec<EntryId>,
    /// Construction result for this attempt
    pub report: ConstructionReport<I>,
}

impl<I> State<I> {
    /// `true` when this attempt produced a full population
    pub fn is_consistent(&self) -> bool {
        self.report.is_consistent()
    }
}

/// Full trace of one inconsistency recovery sequence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "I: Serialize + for<'a> Deserialize<'a>")]
pub struct InconsistencyReport<I> {
    /// Every attempt, in the order it was tried
    pub states: Vec<State<I>>,
    /// Index of the winning state; the last state when unresolved
    pub consistent_state: usize,
    /// Whether a consistent state was found
    pub resolved: bool,
}

impl<I> InconsistencyReport<I> {
    /// Number of attempts made (including attempt 0)
    pub fn attempts(&self) -> usize {
        self.states.len()
    }

    /// The winning state
    ///
    /// # Panics
    /// Never for reports produced by an [`InconsistencyHandler`](super::InconsistencyHandler),
    /// which always record attempt 0.
    pub fn consistent(&self) -> &State<I> {
        &self.states[self.consistent_state]
    }

    /// Entries that must be removed from history to reach the winning state
    pub fn removed_entries(&self) -> &[EntryId] {
        match self.states.get(self.consistent_state) {
            Some(state) => &state.removed,
            None => &[],
        }
    }

    /// Whether a consistent state was found
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

impl<I> fmt::Display for InconsistencyReport<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Attempts = {}, resolved = {}, consistent state = {}",
            self.attempts(),
            self.resolved,
            self.consistent_state
        )?;
        for state in &self.states {
            writeln!(
                f,
                "  [{}] evidence = {}, removed = {}, inconsistent = {}, success rate = {:.4}",
                state.index,
                state.evidence.len(),
                state.removed.len(),
                state.report.inconsistency_detected,
                state.report.success_rate_in_constructing()
            )?;
        }
        Ok(())
    }
}

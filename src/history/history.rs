//! Append-only log of preference statements
//!
//! The history is the single source of truth for what the decision maker has
//! said so far. Entries never change once appended; the only way an entry
//! leaves the log is a resolved inconsistency applied by the owning
//! [`ModelSystem`](crate::system::ModelSystem).

use serde::{Deserialize, Serialize};

use super::entry::{EntryId, HistoryEntry};
use super::statement::PairwiseComparison;
use crate::error::{HistoryError, ModelError, ModelResult};
use crate::system::context::DecisionContext;

/// Ordered, chronological log of [`HistoryEntry`]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a removable statement stamped with the context iteration
    ///
    /// Fails when no decision context is registered.
    pub fn append(
        &mut self,
        context: Option<&DecisionContext>,
        statement: PairwiseComparison,
    ) -> Result<&HistoryEntry, HistoryError> {
        self.append_with(context, statement, true)
    }

    /// Append a statement that inconsistency handling must never prune
    pub fn append_protected(
        &mut self,
        context: Option<&DecisionContext>,
        statement: PairwiseComparison,
    ) -> Result<&HistoryEntry, HistoryError> {
        self.append_with(context, statement, false)
    }

    /// Append a statement with an explicit removability flag
    pub fn append_with(
        &mut self,
        context: Option<&DecisionContext>,
        statement: PairwiseComparison,
        removable: bool,
    ) -> Result<&HistoryEntry, HistoryError> {
        let context = context.ok_or(HistoryError::NoDecisionContext)?;
        let id = self.next_entry_id();
        tracing::debug!(
            entry = %id,
            iteration = context.iteration(),
            removable,
            statement = %statement,
            "registered preference statement"
        );
        self.entries.push(HistoryEntry::new(
            id,
            statement,
            context.iteration(),
            removable,
        ));
        Ok(&self.entries[self.entries.len() - 1])
    }

    fn next_entry_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Ordered snapshot of all entries (oldest first)
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by id
    pub fn get(&self, id: EntryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Iterate over the statements in chronological order
    pub fn statements(&self) -> impl Iterator<Item = &PairwiseComparison> {
        self.entries.iter().map(HistoryEntry::statement)
    }

    /// Ids of removable entries, oldest first
    pub fn removable_ids(&self) -> Vec<EntryId> {
        self.entries
            .iter()
            .filter(|e| e.is_removable())
            .map(HistoryEntry::id)
            .collect()
    }

    /// Remove the given entries; returns how many were removed
    ///
    /// Only the owning model system calls this, after it accepted a
    /// resolved inconsistency.
    pub(crate) fn remove(&mut self, ids: &[EntryId]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !ids.contains(&e.id()));
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = self.entries.len(), "pruned history");
        }
        removed
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> ModelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ModelError::Serialization(format!("Failed to serialize history: {}", e))
        })
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let mut history: Self = serde_json::from_str(json).map_err(|e| {
            ModelError::Serialization(format!("Failed to deserialize history: {}", e))
        })?;
        // Never hand out an id that is already taken
        let max_id = history.entries.iter().map(|e| e.id().0 + 1).max().unwrap_or(0);
        history.next_id = history.next_id.max(max_id);
        Ok(history)
    }
}

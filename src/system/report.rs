//! Model update report

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::construction::report::ConstructionReport;
use crate::history::entry::EntryId;
use crate::inconsistency::state::InconsistencyReport;

/// How an update ended
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateOutcome {
    /// The full evidence was consistent
    Consistent,
    /// Inconsistency was resolved by removing these entries from history
    Resolved {
        /// Removed entries, oldest first
        removed: Vec<EntryId>,
    },
    /// No consistent state could be reached; no model was produced this
    /// iteration
    Unresolved,
}

/// Consolidated result of one `update_model` call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "I: Serialize + for<'a> Deserialize<'a>")]
pub struct Report<I> {
    /// Iteration of the registered context
    pub iteration: usize,
    /// Construction report of the final attempt
    pub construction: ConstructionReport<I>,
    /// Recovery trace; `None` when the first attempt succeeded
    pub inconsistency: Option<InconsistencyReport<I>>,
    /// Whether the full evidence was inconsistent
    pub inconsistency_occurred: bool,
    /// Total time spent in the update
    pub elapsed: Duration,
}

impl<I> Report<I> {
    /// Outcome of the update
    pub fn outcome(&self) -> UpdateOutcome {
        match &self.inconsistency {
            None => UpdateOutcome::Consistent,
            Some(report) if report.is_resolved() => UpdateOutcome::Resolved {
                removed: report.removed_entries().to_vec(),
            },
            Some(_) => UpdateOutcome::Unresolved,
        }
    }

    /// Population produced by the update, if any
    pub fn models(&self) -> Option<&[I]> {
        self.construction.models.as_deref()
    }

    /// `false` when the update ended without a usable population
    pub fn produced_models(&self) -> bool {
        self.construction.is_consistent()
    }
}

impl<I> fmt::Display for Report<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Iteration {}: inconsistency occurred = {}, elapsed = {:.3} ms",
            self.iteration,
            self.inconsistency_occurred,
            self.elapsed.as_secs_f64() * 1000.0
        )?;
        writeln!(f, "{}", self.construction)?;
        if let Some(inconsistency) = &self.inconsistency {
            write!(f, "{}", inconsistency)?;
        }
        Ok(())
    }
}

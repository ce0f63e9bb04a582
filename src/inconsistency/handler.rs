//! Inconsistency handlers
//!
//! When construction cannot fill the population, the evidence is jointly
//! infeasible for the model family. A handler prunes a working copy of the
//! evidence and reconstructs until a consistent state is found. It never
//! touches the history itself: the ids to remove travel back in the report and
//! the owner applies them.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{InconsistencyReport, State};
use crate::construction::constructor::{ConstructionInput, ModelConstructor};
use crate::construction::report::ConstructionReport;
use crate::history::entry::{EntryId, HistoryEntry};
use crate::model::traits::PreferenceModel;
use crate::space::objective_space::ObjectiveSpace;
use crate::system::config::{HandlingVariant, SystemConfig};

/// Inputs of one recovery sequence
pub struct ResolutionInput<'a, M: PreferenceModel, C> {
    /// Model family
    pub model: &'a M,
    /// Constructor re-run on each pruned evidence set
    pub constructor: &'a C,
    /// Full evidence, oldest first
    pub entries: &'a [HistoryEntry],
    /// Population accepted by the previous successful update
    pub previous_population: Option<&'a [M::Instance]>,
    /// Objective space for this update
    pub objective_space: &'a ObjectiveSpace,
    /// Objective space of the previous population
    pub previous_objective_space: Option<&'a ObjectiveSpace>,
    /// Result of the construction on the full evidence (attempt 0)
    pub initial: ConstructionReport<M::Instance>,
}

/// Strategy for recovering from inconsistent evidence
pub trait InconsistencyHandler<M: PreferenceModel> {
    /// Run the recovery sequence
    fn resolve<C, R>(
        &self,
        input: ResolutionInput<'_, M, C>,
        rng: &mut R,
    ) -> InconsistencyReport<M::Instance>
    where
        C: ModelConstructor<M>,
        R: Rng;
}

/// Removes the oldest removable statement, one per attempt
///
/// Attempts are strictly sequential and strictly oldest-first. In exhaustive
/// mode the handler keeps pruning after the first consistent state to record a
/// complete trace; the winning state is still the first consistent one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveOldest {
    exhaustive: bool,
}

impl RemoveOldest {
    /// Stop at the first consistent state
    pub fn new() -> Self {
        Self { exhaustive: false }
    }

    /// Keep pruning until no removable entry is left
    pub fn exhaustive() -> Self {
        Self { exhaustive: true }
    }

    /// Create a handler from the system configuration
    pub fn from_config(config: &SystemConfig) -> Self {
        match config.inconsistency_handling {
            HandlingVariant::StopAtFirstConsistent => Self::new(),
            HandlingVariant::Exhaustive => Self::exhaustive(),
        }
    }

    /// Whether this handler records the exhaustive trace
    pub fn is_exhaustive(&self) -> bool {
        self.exhaustive
    }
}

impl<M: PreferenceModel> InconsistencyHandler<M> for RemoveOldest {
    fn resolve<C, R>(
        &self,
        input: ResolutionInput<'_, M, C>,
        rng: &mut R,
    ) -> InconsistencyReport<M::Instance>
    where
        C: ModelConstructor<M>,
        R: Rng,
    {
        let ResolutionInput {
            model,
            constructor,
            entries,
            previous_population,
            objective_space,
            previous_objective_space,
            initial,
        } = input;

        let base = ConstructionInput {
            model,
            evidence: entries,
            previous_population,
            objective_space,
            previous_objective_space,
        };

        let mut consistent = initial.is_consistent().then_some(0);
        let mut states = vec![State {
            index: 0,
            evidence: entries.to_vec(),
            removed: Vec::new(),
            report: initial,
        }];

        let removable: Vec<EntryId> = entries
            .iter()
            .filter(|e| e.is_removable())
            .map(HistoryEntry::id)
            .collect();

        let mut working: Vec<HistoryEntry> = entries.to_vec();
        let mut removed: Vec<EntryId> = Vec::with_capacity(removable.len());

        for id in removable {
            if consistent.is_some() && !self.exhaustive {
                break;
            }

            working.retain(|e| e.id() != id);
            removed.push(id);

            let report = constructor.construct(base.with_evidence(&working), rng);
            let index = states.len();

            tracing::debug!(
                attempt = index,
                removed = %id,
                remaining = working.len(),
                inconsistent = report.inconsistency_detected,
                "inconsistency handling attempt"
            );

            if consistent.is_none() && report.is_consistent() {
                consistent = Some(index);
            }

            states.push(State {
                index,
                evidence: working.clone(),
                removed: removed.clone(),
                report,
            });
        }

        let resolved = consistent.is_some();
        let consistent_state = consistent.unwrap_or(states.len() - 1);

        if resolved {
            tracing::debug!(
                attempts = states.len(),
                consistent_state,
                "inconsistency resolved"
            );
        } else {
            tracing::warn!(
                attempts = states.len(),
                "inconsistency could not be resolved: no removable statements left"
            );
        }

        InconsistencyReport {
            states,
            consistent_state,
            resolved,
        }
    }
}

//! Model system orchestrator
//!
//! A [`ModelSystem`] owns one preference model, one model constructor, one
//! inconsistency handler and the decision maker's history. Each iteration the
//! caller registers a decision context, optionally runs an elicitation round
//! that appends new statements, and asks for a model update.
//!
//! ```text
//! Unregistered --register--> ContextRegistered --begins--> ElicitationInProgress
//!      ^                        ^        |                        |
//!      |                        |        |                      ends
//!   unregister               update   update                      v
//!      |                        |        |              ModelUpdateAvailable
//!      +------------------------+--------+------------------------+
//! ```
//!
//! The system is single-threaded; use one instance per decision maker.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::config::SystemConfig;
use super::context::DecisionContext;
use super::report::Report;
use crate::construction::constructor::{ConstructionInput, ModelConstructor, RejectionSampling};
use crate::error::{ConfigurationError, HistoryError, ModelResult, SequenceError};
use crate::history::statement::PairwiseComparison;
use crate::history::History;
use crate::inconsistency::handler::{InconsistencyHandler, RemoveOldest, ResolutionInput};
use crate::model::traits::PreferenceModel;
use crate::space::criteria::Criteria;
use crate::space::objective_space::ObjectiveSpace;

/// Lifecycle state of a model system
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemState {
    /// No decision context
    Unregistered,
    /// Context registered, no elicitation running
    ContextRegistered,
    /// Between `notify_preference_elicitation_begins` and `..._ends`
    ElicitationInProgress,
    /// Elicitation ended; an update is expected
    ModelUpdateAvailable,
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unregistered => "UNREGISTERED",
            Self::ContextRegistered => "CONTEXT_REGISTERED",
            Self::ElicitationInProgress => "ELICITATION_IN_PROGRESS",
            Self::ModelUpdateAvailable => "MODEL_UPDATE_AVAILABLE",
        };
        write!(f, "{}", name)
    }
}

/// A statement supplied during elicitation, with its removability flag
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElicitedPreference {
    /// The statement
    pub statement: PairwiseComparison,
    /// Whether inconsistency handling may prune it (default `true`)
    pub removable: bool,
}

impl ElicitedPreference {
    /// A statement inconsistency handling must never prune
    pub fn protected(statement: PairwiseComparison) -> Self {
        Self {
            statement,
            removable: false,
        }
    }
}

impl From<PairwiseComparison> for ElicitedPreference {
    fn from(statement: PairwiseComparison) -> Self {
        Self {
            statement,
            removable: true,
        }
    }
}

/// Orchestrates history, model construction and inconsistency handling
pub struct ModelSystem<M, C, H>
where
    M: PreferenceModel,
{
    model: M,
    constructor: C,
    handler: H,
    history: History,
    context: Option<DecisionContext>,
    state: SystemState,
    /// Objective space the installed population was built in
    population_space: Option<ObjectiveSpace>,
    updates: usize,
}

impl<M> ModelSystem<M, RejectionSampling, RemoveOldest>
where
    M: PreferenceModel,
{
    /// Create a system with rejection sampling and remove-oldest handling
    /// parametrized by `config`
    pub fn with_config(model: M, config: &SystemConfig) -> ModelResult<Self> {
        config.validate()?;
        ModelSystemBuilder::new()
            .preference_model(model)
            .model_constructor(RejectionSampling::from_config(config))
            .inconsistency_handler(RemoveOldest::from_config(config))
            .build()
    }
}

impl<M, C, H> ModelSystem<M, C, H>
where
    M: PreferenceModel,
    C: ModelConstructor<M>,
    H: InconsistencyHandler<M>,
{
    /// Start building a model system
    pub fn builder() -> ModelSystemBuilder<M, C, H> {
        ModelSystemBuilder::new()
    }

    /// Register the decision context for the current iteration
    ///
    /// Replaces any previously registered context.
    pub fn register_decision_making_context(
        &mut self,
        context: DecisionContext,
    ) -> ModelResult<()> {
        if self.state == SystemState::ElicitationInProgress {
            return Err(SequenceError::ElicitationInProgress.into());
        }
        context.validate()?;

        tracing::debug!(
            iteration = context.iteration(),
            previous_state = %self.state,
            "registered decision-making context"
        );
        self.context = Some(context);
        self.state = SystemState::ContextRegistered;
        Ok(())
    }

    /// Drop the registered context
    ///
    /// Elicitation and update calls fail until a context is registered again.
    pub fn unregister_decision_making_context(&mut self) -> ModelResult<()> {
        if self.context.is_none() {
            return Err(SequenceError::NoContextRegistered.into());
        }
        self.context = None;
        self.state = SystemState::Unregistered;
        tracing::debug!("unregistered decision-making context");
        Ok(())
    }

    /// Mark the start of an elicitation round
    pub fn notify_preference_elicitation_begins(&mut self) -> ModelResult<()> {
        match self.state {
            SystemState::Unregistered => Err(SequenceError::NoContextRegistered.into()),
            SystemState::ElicitationInProgress => {
                Err(SequenceError::ElicitationAlreadyStarted.into())
            }
            SystemState::ContextRegistered | SystemState::ModelUpdateAvailable => {
                self.state = SystemState::ElicitationInProgress;
                Ok(())
            }
        }
    }

    /// Append the statements elicited in the current round
    ///
    /// Returns the number of statements appended.
    pub fn notify_about_most_recent_preference_information<I, P>(
        &mut self,
        preferences: I,
    ) -> ModelResult<usize>
    where
        I: IntoIterator<Item = P>,
        P: Into<ElicitedPreference>,
    {
        match self.state {
            SystemState::Unregistered => return Err(SequenceError::NoContextRegistered.into()),
            SystemState::ElicitationInProgress => {}
            _ => return Err(SequenceError::ElicitationNotStarted.into()),
        }

        let dimension = self
            .context
            .as_ref()
            .and_then(DecisionContext::criteria)
            .map(Criteria::dimension)
            .ok_or(ConfigurationError::MissingCriteria)?;

        // Validate the whole round before appending anything
        let preferences: Vec<ElicitedPreference> =
            preferences.into_iter().map(Into::into).collect();
        if let Some(bad) = preferences
            .iter()
            .find(|p| p.statement.first().dimension() != dimension)
        {
            return Err(HistoryError::InvalidStatement(format!(
                "{} compares alternatives with {} objectives, but the context has {} criteria",
                bad.statement,
                bad.statement.first().dimension(),
                dimension
            ))
            .into());
        }

        let appended = preferences.len();
        for ElicitedPreference {
            statement,
            removable,
        } in preferences
        {
            self.history
                .append_with(self.context.as_ref(), statement, removable)?;
        }
        Ok(appended)
    }

    /// Mark the end of an elicitation round
    pub fn notify_preference_elicitation_ends(&mut self) -> ModelResult<()> {
        match self.state {
            SystemState::Unregistered => Err(SequenceError::NoContextRegistered.into()),
            SystemState::ElicitationInProgress => {
                self.state = SystemState::ModelUpdateAvailable;
                Ok(())
            }
            _ => Err(SequenceError::ElicitationNotStarted.into()),
        }
    }

    /// Rebuild the model population against the full history
    ///
    /// Inconsistent evidence is handed to the inconsistency handler; when it
    /// finds a consistent state the pruned entries are removed from history.
    /// An unresolved inconsistency is not an error: the report's outcome is
    /// [`UpdateOutcome::Unresolved`](super::report::UpdateOutcome::Unresolved)
    /// and the model holds no population until the next successful update.
    pub fn update_model(&mut self) -> ModelResult<Report<M::Instance>> {
        match self.state {
            SystemState::Unregistered => return Err(SequenceError::NoContextRegistered.into()),
            SystemState::ElicitationInProgress => {
                return Err(SequenceError::ElicitationInProgress.into())
            }
            SystemState::ContextRegistered | SystemState::ModelUpdateAvailable => {}
        }

        let start = Instant::now();
        let context = self
            .context
            .as_mut()
            .ok_or(SequenceError::NoContextRegistered)?;
        let iteration = context.iteration();
        let space = context
            .objective_space()
            .cloned()
            .ok_or(ConfigurationError::MissingObjectiveSpace)?;
        let rng = context.rng_mut();

        let previous_population = self.model.current_population();
        let initial = self.constructor.construct(
            ConstructionInput {
                model: &self.model,
                evidence: self.history.entries(),
                previous_population,
                objective_space: &space,
                previous_objective_space: self.population_space.as_ref(),
            },
            rng,
        );

        let inconsistency_occurred = initial.inconsistency_detected;
        let (construction, inconsistency) = if inconsistency_occurred {
            tracing::info!(
                iteration,
                evidence = self.history.count(),
                "preference information is inconsistent, running inconsistency handling"
            );
            let report = self.handler.resolve(
                ResolutionInput {
                    model: &self.model,
                    constructor: &self.constructor,
                    entries: self.history.entries(),
                    previous_population,
                    objective_space: &space,
                    previous_objective_space: self.population_space.as_ref(),
                    initial,
                },
                rng,
            );
            (report.consistent().report.clone(), Some(report))
        } else {
            (initial, None)
        };

        if let Some(report) = &inconsistency {
            if report.is_resolved() {
                self.history.remove(report.removed_entries());
            }
        }

        if construction.is_consistent() {
            self.model.replace_population(construction.models.clone());
            self.population_space = Some(space);
        } else {
            tracing::warn!(
                iteration,
                "no consistent preference model could be constructed this iteration"
            );
            self.model.replace_population(None);
            self.population_space = None;
        }

        self.state = SystemState::ContextRegistered;
        self.updates += 1;

        let report = Report {
            iteration,
            construction,
            inconsistency,
            inconsistency_occurred,
            elapsed: start.elapsed(),
        };
        tracing::debug!(
            iteration,
            outcome = ?report.outcome(),
            models = report.construction.models_size(),
            "model update finished"
        );
        Ok(report)
    }

    /// The decision maker's history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The preference model (with the installed population)
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The model constructor
    pub fn constructor(&self) -> &C {
        &self.constructor
    }

    /// The inconsistency handler
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Current lifecycle state
    pub fn state(&self) -> SystemState {
        self.state
    }

    /// Registered decision context
    pub fn context(&self) -> Option<&DecisionContext> {
        self.context.as_ref()
    }

    /// Number of completed updates
    pub fn updates(&self) -> usize {
        self.updates
    }
}

/// Builder for [`ModelSystem`]
///
/// Components are validated in a fixed order (preference model, model
/// constructor, inconsistency handler) so the reported error is deterministic.
pub struct ModelSystemBuilder<M, C, H> {
    model: Option<M>,
    constructor: Option<C>,
    handler: Option<H>,
    history: Option<History>,
}

impl<M, C, H> ModelSystemBuilder<M, C, H> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            model: None,
            constructor: None,
            handler: None,
            history: None,
        }
    }

    /// Set the preference model
    pub fn preference_model(mut self, model: M) -> Self {
        self.model = Some(model);
        self
    }

    /// Set the model constructor
    pub fn model_constructor(mut self, constructor: C) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Set the inconsistency handler
    pub fn inconsistency_handler(mut self, handler: H) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Resume from a previously saved history
    pub fn history(mut self, history: History) -> Self {
        self.history = Some(history);
        self
    }
}

impl<M, C, H> Default for ModelSystemBuilder<M, C, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, C, H> ModelSystemBuilder<M, C, H>
where
    M: PreferenceModel,
    C: ModelConstructor<M>,
    H: InconsistencyHandler<M>,
{
    /// Build the model system
    pub fn build(self) -> ModelResult<ModelSystem<M, C, H>> {
        let model = self
            .model
            .ok_or(ConfigurationError::MissingPreferenceModel)?;
        let constructor = self
            .constructor
            .ok_or(ConfigurationError::MissingModelConstructor)?;
        let handler = self
            .handler
            .ok_or(ConfigurationError::MissingInconsistencyHandler)?;

        if constructor.population_size() == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "population_size",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        constructor.validate()?;

        Ok(ModelSystem {
            model,
            constructor,
            handler,
            history: self.history.unwrap_or_default(),
            context: None,
            state: SystemState::Unregistered,
            population_space: None,
            updates: 0,
        })
    }
}

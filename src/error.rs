//! Error types for dm-model
//!
//! Configuration problems and call-order mistakes are errors. Inconsistent
//! preference information is not: it is reported as data on
//! [`ConstructionReport`](crate::construction::ConstructionReport) and
//! [`Report`](crate::system::Report).

use thiserror::Error;

/// Error raised while assembling a model system or validating its inputs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    /// No preference model was supplied to the builder
    #[error("The preference model is not provided")]
    MissingPreferenceModel,

    /// No model constructor was supplied to the builder
    #[error("The model constructor is not provided")]
    MissingModelConstructor,

    /// No inconsistency handler was supplied to the builder
    #[error("The inconsistency handler is not provided")]
    MissingInconsistencyHandler,

    /// The decision context carries no criteria
    #[error("The decision context does not provide criteria")]
    MissingCriteria,

    /// The decision context carries no objective space
    #[error("The decision context does not provide objective space bounds")]
    MissingObjectiveSpace,

    /// Criteria and objective space disagree on the number of objectives
    #[error("Dimension mismatch: {criteria} criteria but {objectives} objective bounds")]
    DimensionMismatch { criteria: usize, objectives: usize },

    /// A configuration value is out of its admissible range
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Error raised when the model system lifecycle is driven out of order
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// An operation needs a registered decision context
    #[error("No decision-making context is registered")]
    NoContextRegistered,

    /// Preference information arrived before elicitation began
    #[error("Preference elicitation has not begun")]
    ElicitationNotStarted,

    /// Elicitation was started twice without being ended
    #[error("Preference elicitation has already begun")]
    ElicitationAlreadyStarted,

    /// The operation is not allowed while elicitation is in progress
    #[error("Preference elicitation is still in progress")]
    ElicitationInProgress,
}

/// Error raised by the preference history
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HistoryError {
    /// Statements can only be stamped with a registered decision context
    #[error("Cannot register preference information: no decision context is available")]
    NoDecisionContext,

    /// The statement is malformed
    #[error("Invalid preference statement: {0}")]
    InvalidStatement(String),
}

/// Top-level error type for model system operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Lifecycle ordering error
    #[error("Sequence error: {0}")]
    Sequence(#[from] SequenceError),

    /// History error
    #[error("History error: {0}")]
    History(#[from] HistoryError),

    /// Config (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for model system operations
pub type ModelResult<T> = Result<T, ModelError>;

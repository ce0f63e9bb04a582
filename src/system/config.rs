//! Model system configuration

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, ModelError, ModelResult};

/// Which trace the inconsistency handler records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlingVariant {
    /// Stop at the first consistent state
    StopAtFirstConsistent,
    /// Keep pruning past the first consistent state for a complete diagnostic
    /// trace; the winning state is unchanged
    Exhaustive,
}

impl Default for HandlingVariant {
    fn default() -> Self {
        Self::StopAtFirstConsistent
    }
}

/// Construction-time configuration of a model system
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Number of model instances in a consistent population
    pub population_size: usize,
    /// Fresh-sample ceiling per construction attempt
    pub max_sampling_attempts: usize,
    /// Inconsistency handling variant
    #[serde(default)]
    pub inconsistency_handling: HandlingVariant,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_sampling_attempts: 50_000,
            inconsistency_handling: HandlingVariant::StopAtFirstConsistent,
        }
    }
}

impl SystemConfig {
    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the fresh-sample ceiling
    pub fn max_sampling_attempts(mut self, attempts: usize) -> Self {
        self.max_sampling_attempts = attempts;
        self
    }

    /// Set the inconsistency handling variant
    pub fn inconsistency_handling(mut self, variant: HandlingVariant) -> Self {
        self.inconsistency_handling = variant;
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.population_size == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "population_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_sampling_attempts < self.population_size {
            return Err(ConfigurationError::InvalidValue {
                field: "max_sampling_attempts",
                reason: format!(
                    "must be at least the population size ({}), got {}",
                    self.population_size, self.max_sampling_attempts
                ),
            });
        }
        Ok(())
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> ModelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ModelError::Serialization(format!("Failed to serialize config: {}", e))
        })
    }

    /// Deserialize from a JSON string and validate
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            ModelError::Serialization(format!("Failed to deserialize config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

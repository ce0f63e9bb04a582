//! Construction statistics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Result of one model construction attempt
///
/// Success rates are derived from the counts on demand and are never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "I: Serialize + for<'a> Deserialize<'a>")]
pub struct ConstructionReport<I> {
    /// Sampling ran out of attempts before the population was filled
    pub inconsistency_detected: bool,
    /// Constructed population; `None` when inconsistency was detected
    pub models: Option<Vec<I>>,
    /// Population size the constructor was asked for
    pub expected_population_size: usize,
    /// Number of statements the population was tested against
    pub evidence_size: usize,
    /// Freshly sampled instances that satisfied all statements
    pub accepted_new: usize,
    /// Freshly sampled instances that failed at least one statement
    pub rejected_new: usize,
    /// Instances carried over unchanged from the previous population
    pub preserved: usize,
    /// Previous instances discarded because they no longer fit the evidence
    pub rejected_between_iterations: usize,
    /// The previous population was discarded because normalization changed
    /// (or there was no previous population)
    pub normalization_updated: bool,
    /// Wall-clock time spent constructing
    pub elapsed: Duration,
}

impl<I> ConstructionReport<I> {
    /// `true` when a full population was produced
    pub fn is_consistent(&self) -> bool {
        !self.inconsistency_detected
    }

    /// Size of the produced population (0 when none)
    pub fn models_size(&self) -> usize {
        self.models.as_ref().map_or(0, Vec::len)
    }

    /// Total number of fresh samples drawn
    pub fn sampling_attempts(&self) -> usize {
        self.accepted_new + self.rejected_new
    }

    /// accepted / (accepted + rejected) over fresh samples; 0 when none were drawn
    pub fn success_rate_in_constructing(&self) -> f64 {
        ratio(self.accepted_new, self.rejected_new)
    }

    /// preserved / (preserved + rejected) over carried-over instances; 0 when
    /// nothing was carried over
    pub fn success_rate_in_preserving(&self) -> f64 {
        ratio(self.preserved, self.rejected_between_iterations)
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

fn ratio(success: usize, failure: usize) -> f64 {
    let total = success + failure;
    if total > 0 {
        success as f64 / total as f64
    } else {
        0.0
    }
}

impl<I> fmt::Display for ConstructionReport<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inconsistency detected = {}", self.inconsistency_detected)?;
        writeln!(
            f,
            "Models = {} / {} (evidence size = {})",
            self.models_size(),
            self.expected_population_size,
            self.evidence_size
        )?;
        writeln!(
            f,
            "Preserved = {}, rejected between iterations = {} (success rate = {:.4})",
            self.preserved,
            self.rejected_between_iterations,
            self.success_rate_in_preserving()
        )?;
        writeln!(
            f,
            "Accepted new = {}, rejected new = {} (success rate = {:.4})",
            self.accepted_new,
            self.rejected_new,
            self.success_rate_in_constructing()
        )?;
        write!(
            f,
            "Normalization updated = {}, elapsed = {:.3} ms",
            self.normalization_updated,
            self.elapsed_ms()
        )
    }
}

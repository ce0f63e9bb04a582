//! Pairwise preference statements

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HistoryError;
use crate::space::alternative::Alternative;

/// Relation expressed between two alternatives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// The first alternative is preferred to the second
    Preference,
    /// The decision maker cannot tell the two apart
    Indifference,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preference => write!(f, ">"),
            Self::Indifference => write!(f, "~"),
        }
    }
}

/// A single unit of preference evidence, e.g. "A is preferred to B"
///
/// Statements are immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairwiseComparison {
    first: Alternative,
    second: Alternative,
    relation: Relation,
}

impl PairwiseComparison {
    /// Create a statement, rejecting malformed comparisons
    pub fn new(
        first: Alternative,
        second: Alternative,
        relation: Relation,
    ) -> Result<Self, HistoryError> {
        if first.id() == second.id() {
            return Err(HistoryError::InvalidStatement(format!(
                "{} is compared with itself",
                first.id()
            )));
        }
        if first.dimension() == 0 || first.dimension() != second.dimension() {
            return Err(HistoryError::InvalidStatement(format!(
                "{} and {} have incompatible evaluation vectors ({} vs {})",
                first.id(),
                second.id(),
                first.dimension(),
                second.dimension()
            )));
        }
        let has_nan = first
            .evaluations()
            .iter()
            .chain(second.evaluations())
            .any(|v| v.is_nan());
        if has_nan {
            return Err(HistoryError::InvalidStatement(
                "evaluations contain NaN".to_string(),
            ));
        }
        Ok(Self {
            first,
            second,
            relation,
        })
    }

    /// "`preferred` is preferred to `other`"
    pub fn preference(preferred: Alternative, other: Alternative) -> Result<Self, HistoryError> {
        Self::new(preferred, other, Relation::Preference)
    }

    /// "`a` and `b` are equally good"
    pub fn indifference(a: Alternative, b: Alternative) -> Result<Self, HistoryError> {
        Self::new(a, b, Relation::Indifference)
    }

    /// First alternative (the preferred one for [`Relation::Preference`])
    pub fn first(&self) -> &Alternative {
        &self.first
    }

    /// Second alternative
    pub fn second(&self) -> &Alternative {
        &self.second
    }

    /// Relation between the two
    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Same comparison with the preference direction swapped
    pub fn reversed(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
            relation: self.relation,
        }
    }
}

impl fmt::Display for PairwiseComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.first.id(),
            self.relation,
            self.second.id()
        )
    }
}

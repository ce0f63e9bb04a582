//! Simulated decision maker

use serde::{Deserialize, Serialize};

use super::FeedbackProvider;
use crate::error::HistoryError;
use crate::history::statement::PairwiseComparison;
use crate::model::scalarizing::ScalarizingFunction;
use crate::space::alternative::Alternative;
use crate::space::objective_space::ObjectiveSpace;

/// Decision maker driven by a hidden scalarizing function
///
/// Every pair of the reference set is compared once, in index order. Pairs
/// whose scores differ by at most `indifference_threshold` are reported as
/// indifference, all others as a preference for the lower score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtificialDecisionMaker {
    hidden: ScalarizingFunction,
    space: ObjectiveSpace,
    indifference_threshold: f64,
    contradictions: usize,
}

impl ArtificialDecisionMaker {
    /// Create a decision maker with a hidden function in `space`
    pub fn new(hidden: ScalarizingFunction, space: ObjectiveSpace) -> Self {
        Self {
            hidden,
            space,
            indifference_threshold: 0.0,
            contradictions: 0,
        }
    }

    /// Report indifference for near-equal scores
    pub fn with_indifference_threshold(mut self, threshold: f64) -> Self {
        self.indifference_threshold = threshold.max(0.0);
        self
    }

    /// Reverse the next `count` preference statements
    pub fn contradict_next(&mut self, count: usize) {
        self.contradictions += count;
    }

    /// Hidden scalarizing function
    pub fn hidden(&self) -> &ScalarizingFunction {
        &self.hidden
    }

    /// Score of an alternative under the hidden function
    pub fn score(&self, alternative: &Alternative) -> f64 {
        self.hidden.evaluate(alternative.evaluations(), &self.space)
    }

    fn judge(&mut self, a: &Alternative, b: &Alternative) -> Result<PairwiseComparison, HistoryError> {
        let (sa, sb) = (self.score(a), self.score(b));
        if (sa - sb).abs() <= self.indifference_threshold {
            return PairwiseComparison::indifference(a.clone(), b.clone());
        }

        let statement = if sa < sb {
            PairwiseComparison::preference(a.clone(), b.clone())?
        } else {
            PairwiseComparison::preference(b.clone(), a.clone())?
        };

        if self.contradictions > 0 {
            self.contradictions -= 1;
            tracing::debug!(statement = %statement, "reversing statement");
            return Ok(statement.reversed());
        }
        Ok(statement)
    }
}

impl FeedbackProvider for ArtificialDecisionMaker {
    fn compare(
        &mut self,
        reference_set: &[Alternative],
    ) -> Result<Vec<PairwiseComparison>, HistoryError> {
        let mut statements = Vec::new();
        for (i, a) in reference_set.iter().enumerate() {
            for b in &reference_set[i + 1..] {
                statements.push(self.judge(a, b)?);
            }
        }
        Ok(statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::statement::Relation;
    use crate::model::scalarizing::ScalarizingModel;
    use crate::model::traits::PreferenceModel;

    fn dm() -> ArtificialDecisionMaker {
        ArtificialDecisionMaker::new(
            ScalarizingFunction::weighted_sum(vec![0.7, 0.3]),
            ObjectiveSpace::unit(2),
        )
    }

    fn set() -> Vec<Alternative> {
        vec![
            Alternative::new(0, vec![0.9, 0.1]),
            Alternative::new(1, vec![0.1, 0.9]),
            Alternative::new(2, vec![0.5, 0.5]),
        ]
    }

    #[test]
    fn test_compares_every_pair() {
        let statements = dm().compare(&set()).unwrap();
        assert_eq!(statements.len(), 3);
        // 0.7 * 0.1 + 0.3 * 0.9 = 0.34 is the best score
        assert_eq!(statements[0].first().id().0, 1);
        assert!(statements
            .iter()
            .all(|s| s.relation() == Relation::Preference));
    }

    #[test]
    fn test_hidden_function_is_feasible() {
        let mut dm = dm();
        let statements = dm.compare(&set()).unwrap();
        let model = ScalarizingModel::weighted_sum();
        let space = ObjectiveSpace::unit(2);

        assert!(model.is_feasible_for_all(dm.hidden(), &statements, &space));
    }

    #[test]
    fn test_contradiction_reverses_next_statement() {
        let mut dm = dm();
        let honest = dm.compare(&set()).unwrap();

        dm.contradict_next(1);
        let answers = dm.compare(&set()).unwrap();

        assert_eq!(answers[0], honest[0].reversed());
        assert_eq!(answers[1..], honest[1..]);
    }

    #[test]
    fn test_indifference_threshold() {
        let mut dm = dm().with_indifference_threshold(1.0);
        let statements = dm.compare(&set()).unwrap();
        assert!(statements
            .iter()
            .all(|s| s.relation() == Relation::Indifference));
    }

    #[test]
    fn test_mixed_dimensions_are_reported() {
        let mut dm = dm();
        let set = vec![
            Alternative::new(0, vec![0.9, 0.1]),
            Alternative::new(1, vec![0.1, 0.9, 0.5]),
        ];
        assert!(matches!(
            dm.compare(&set),
            Err(HistoryError::InvalidStatement(_))
        ));
    }
}

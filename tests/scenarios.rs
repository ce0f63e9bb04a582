//! End-to-end elicitation scenarios
//!
//! Each test drives a model system the way an interactive optimizer would:
//! reduce the candidate set, build a reference set, ask a (simulated) decision
//! maker, then update the model.

use dm_model::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn context(iteration: usize, seed: u64) -> DecisionContext {
    DecisionContext::new(
        iteration,
        Criteria::costs(2),
        ObjectiveSpace::unit(2),
        StdRng::seed_from_u64(seed),
    )
}

fn system(population_size: usize) -> ModelSystem<ScalarizingModel, RejectionSampling, RemoveOldest> {
    let config = SystemConfig::default()
        .population_size(population_size)
        .max_sampling_attempts(5_000);
    ModelSystem::with_config(ScalarizingModel::weighted_sum(), &config).unwrap()
}

fn elicit<S, P>(system: &mut ModelSystem<ScalarizingModel, RejectionSampling, RemoveOldest>, statements: S)
where
    S: IntoIterator<Item = P>,
    P: Into<ElicitedPreference>,
{
    system.notify_preference_elicitation_begins().unwrap();
    system
        .notify_about_most_recent_preference_information(statements)
        .unwrap();
    system.notify_preference_elicitation_ends().unwrap();
}

#[test]
fn test_consistent_statements_produce_full_population() {
    let mut rng = StdRng::seed_from_u64(42);
    let candidates = vec![
        Alternative::new(0, vec![0.2, 0.8]),
        Alternative::new(1, vec![0.8, 0.2]),
        Alternative::new(2, vec![0.5, 0.55]),
    ];

    let constructors = vec![RandomReferenceSet::new(2), RandomReferenceSet::new(2)];
    let reduction = AlternativeReduction::for_constructors(&constructors)
        .with_filter(DuplicateFilter::new())
        .with_filter(NonDominatedFilter::new(ObjectiveSpace::unit(2)));
    let reduced = reduction.reduce(candidates);
    assert!(reduced.is_processed());
    assert_eq!(reduced.alternatives.len(), 3);
    assert!(constructors
        .iter()
        .all(|c| c.construct(&reduced.alternatives, &mut rng).len() == 2));

    let mut dm = ArtificialDecisionMaker::new(
        ScalarizingFunction::weighted_sum(vec![0.7, 0.3]),
        ObjectiveSpace::unit(2),
    );
    let statements = dm.compare(&reduced.alternatives).unwrap();
    assert_eq!(statements.len(), 3);

    let mut system = system(2);
    system.register_decision_making_context(context(0, 42)).unwrap();
    elicit(&mut system, statements);
    let report = system.update_model().unwrap();

    assert!(!report.inconsistency_occurred);
    assert_eq!(report.outcome(), UpdateOutcome::Consistent);
    assert_eq!(report.construction.models_size(), 2);
    assert_eq!(report.construction.evidence_size, 3);
    assert_eq!(system.history().count(), 3);

    let space = ObjectiveSpace::unit(2);
    let models = system.model().current_population().unwrap();
    for instance in models {
        assert!(system
            .model()
            .is_feasible_for_all(instance, system.history().statements(), &space));
    }
}

#[test]
fn test_insufficient_alternatives_after_reduction() {
    let mut candidates: Vec<Alternative> = (0..5)
        .map(|i| {
            let x = i as f64 / 4.0;
            Alternative::new(i, vec![x, 1.0 - x])
        })
        .collect();
    candidates.extend((5..40).map(|i| Alternative::new(i, vec![1.5, 1.5])));

    let reduction = AlternativeReduction::for_constructors(&[RandomReferenceSet::new(100)])
        .with_filter(NonDominatedFilter::new(ObjectiveSpace::uniform(
            Bounds::new(0.0, 2.0),
            2,
        )));

    let result = reduction.reduce(candidates);

    assert_eq!(
        result.status,
        ReductionStatus::TerminatedDueToInsufficientAlternatives
    );
    assert_eq!(
        result.message.as_deref(),
        Some("required = 100 but 5 remained after reduction")
    );
}

#[test]
fn test_contradiction_is_pruned_from_history() {
    let a = Alternative::new(0, vec![0.2, 0.8]);
    let b = Alternative::new(1, vec![0.8, 0.2]);

    let mut system = system(5);
    system.register_decision_making_context(context(0, 42)).unwrap();
    elicit(
        &mut system,
        vec![
            PairwiseComparison::preference(a.clone(), b.clone()).unwrap(),
            PairwiseComparison::preference(b, a).unwrap(),
        ],
    );
    let pruned = system.history().entries()[0].id();

    let report = system.update_model().unwrap();

    assert!(report.inconsistency_occurred);
    let inconsistency = report.inconsistency.as_ref().unwrap();
    assert!(inconsistency.attempts() >= 1);
    assert!(inconsistency.is_resolved());
    assert_eq!(inconsistency.removed_entries(), &[pruned]);
    assert!(system.history().get(pruned).is_none());
    assert_eq!(system.history().count(), 1);
    assert_eq!(report.construction.models_size(), 5);
}

#[test]
fn test_self_contradicting_decision_maker_over_iterations() {
    let space = ObjectiveSpace::unit(2);
    let mut dm =
        ArtificialDecisionMaker::new(ScalarizingFunction::weighted_sum(vec![0.6, 0.4]), space);
    let mut system = system(4);

    let rounds = [
        vec![
            Alternative::new(0, vec![0.1, 0.9]),
            Alternative::new(1, vec![0.9, 0.1]),
        ],
        vec![
            Alternative::new(2, vec![0.3, 0.6]),
            Alternative::new(3, vec![0.7, 0.2]),
        ],
        vec![
            Alternative::new(4, vec![0.2, 0.9]),
            Alternative::new(5, vec![0.8, 0.3]),
        ],
    ];

    let mut outcomes = Vec::new();
    for (iteration, round) in rounds.iter().enumerate() {
        if iteration == 2 {
            dm.contradict_next(1);
        }
        system
            .register_decision_making_context(context(iteration, 42 + iteration as u64))
            .unwrap();
        elicit(&mut system, dm.compare(round).unwrap());
        let report = system.update_model().unwrap();
        assert!(report.produced_models());
        outcomes.push(report.outcome());
    }

    assert_eq!(outcomes[0], UpdateOutcome::Consistent);
    assert_eq!(outcomes[1], UpdateOutcome::Consistent);
    assert!(matches!(outcomes[2], UpdateOutcome::Resolved { .. }));

    // Every surviving statement is satisfied by the installed population
    let population = system.model().current_population().unwrap();
    assert_eq!(population.len(), 4);
    for instance in population {
        assert!(system.model().is_feasible_for_all(
            instance,
            system.history().statements(),
            &ObjectiveSpace::unit(2)
        ));
    }
    assert_eq!(system.updates(), 3);
}

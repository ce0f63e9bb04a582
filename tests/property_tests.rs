//! Property-based tests for dm-model
//!
//! Uses proptest to verify invariants of construction, inconsistency handling
//! and the model system.

use dm_model::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn alternatives(points: &[(f64, f64)]) -> Vec<Alternative> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Alternative::new(i, vec![x, y]))
        .collect()
}

/// Statements between consecutive alternatives, direction chosen by `flips`
fn statements(alternatives: &[Alternative], flips: &[bool]) -> Vec<PairwiseComparison> {
    alternatives
        .windows(2)
        .zip(flips.iter().cycle())
        .map(|(pair, &flip)| {
            let (a, b) = if flip {
                (pair[1].clone(), pair[0].clone())
            } else {
                (pair[0].clone(), pair[1].clone())
            };
            PairwiseComparison::preference(a, b).unwrap()
        })
        .collect()
}

fn history(statements: Vec<PairwiseComparison>, protected: &[bool]) -> History {
    let ctx = DecisionContext::new(
        0,
        Criteria::costs(2),
        ObjectiveSpace::unit(2),
        StdRng::seed_from_u64(0),
    );
    let mut history = History::new();
    for (statement, &keep) in statements.into_iter().zip(protected.iter().cycle()) {
        history.append_with(Some(&ctx), statement, !keep).unwrap();
    }
    history
}

fn construct(
    model: &ScalarizingModel,
    constructor: &RejectionSampling,
    evidence: &[HistoryEntry],
    previous: Option<&[ScalarizingFunction]>,
    seed: u64,
) -> ConstructionReport<ScalarizingFunction> {
    let space = ObjectiveSpace::unit(2);
    constructor.construct(
        ConstructionInput {
            model,
            evidence,
            previous_population: previous,
            objective_space: &space,
            previous_objective_space: previous.map(|_| &space),
        },
        &mut StdRng::seed_from_u64(seed),
    )
}

fn point() -> impl Strategy<Value = (f64, f64)> {
    (0.0..1.0f64, 0.0..1.0f64)
}

proptest! {
    // ==================== Space Properties ====================

    #[test]
    fn normalized_values_within_unit_interval(
        min in -100.0..0.0f64,
        width in 0.1..100.0f64,
        t in 0.0..=1.0f64,
        gain in any::<bool>()
    ) {
        let bounds = Bounds::new(min, min + width);
        let criteria = Criteria::new(vec![if gain {
            Criterion::gain("x")
        } else {
            Criterion::cost("x")
        }])
        .unwrap();
        let space = ObjectiveSpace::new(vec![bounds]).with_criteria(&criteria);
        let value = space.normalize(&[min + t * width])[0];
        prop_assert!((-1e-9..=1.0 + 1e-9).contains(&value));
    }

    #[test]
    fn sampled_weights_on_simplex(dim in 1usize..8, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let weights = SimplexWeightSampler::new().sample_weights(dim, &mut rng);
        prop_assert_eq!(weights.len(), dim);
        prop_assert!(weights.iter().all(|w| *w >= 0.0));
        prop_assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    // ==================== Model Properties ====================

    #[test]
    fn feasibility_is_pure(
        points in prop::collection::vec(point(), 2..6),
        weight in 0.0..1.0f64
    ) {
        let model = ScalarizingModel::chebyshev();
        let space = ObjectiveSpace::unit(2);
        let instance = ScalarizingFunction::chebyshev(vec![weight, 1.0 - weight]);

        for statement in statements(&alternatives(&points), &[false]) {
            let first = model.is_feasible(&instance, &statement, &space);
            let second = model.is_feasible(&instance, &statement, &space);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn preference_and_reverse_never_both_feasible(
        a in point(),
        b in point(),
        weight in 0.0..1.0f64
    ) {
        let model = ScalarizingModel::weighted_sum();
        let space = ObjectiveSpace::unit(2);
        let instance = ScalarizingFunction::weighted_sum(vec![weight, 1.0 - weight]);
        let statement = statements(&alternatives(&[a, b]), &[false]).remove(0);

        prop_assert!(
            !(model.is_feasible(&instance, &statement, &space)
                && model.is_feasible(&instance, &statement.reversed(), &space))
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // ==================== Construction Properties ====================

    #[test]
    fn construction_is_deterministic(
        points in prop::collection::vec(point(), 2..5),
        flips in prop::collection::vec(any::<bool>(), 1..4),
        seed in any::<u64>()
    ) {
        let model = ScalarizingModel::weighted_sum();
        let constructor = RejectionSampling::new(4, 400);
        let history = history(statements(&alternatives(&points), &flips), &[false]);

        let a = construct(&model, &constructor, history.entries(), None, seed);
        let b = construct(&model, &constructor, history.entries(), None, seed);

        prop_assert_eq!(a.inconsistency_detected, b.inconsistency_detected);
        prop_assert_eq!(a.models, b.models);
        prop_assert_eq!(a.accepted_new, b.accepted_new);
        prop_assert_eq!(a.rejected_new, b.rejected_new);
    }

    #[test]
    fn population_size_invariant(
        points in prop::collection::vec(point(), 2..5),
        flips in prop::collection::vec(any::<bool>(), 1..4),
        size in 1usize..6,
        seed in any::<u64>()
    ) {
        let model = ScalarizingModel::chebyshev();
        let constructor = RejectionSampling::new(size, 300);
        let history = history(statements(&alternatives(&points), &flips), &[false]);

        let report = construct(&model, &constructor, history.entries(), None, seed);

        if report.inconsistency_detected {
            prop_assert!(report.models.is_none());
            prop_assert_eq!(report.sampling_attempts(), 300);
        } else {
            prop_assert_eq!(report.models_size(), size);
            prop_assert_eq!(report.accepted_new, size);
        }
        prop_assert!(report.success_rate_in_constructing() >= 0.0);
        prop_assert!(report.success_rate_in_constructing() <= 1.0);
    }

    #[test]
    fn unchanged_evidence_preserves_population(
        points in prop::collection::vec(point(), 2..4),
        seed in any::<u64>()
    ) {
        let model = ScalarizingModel::weighted_sum();
        let constructor = RejectionSampling::new(3, 2_000);
        let history = history(statements(&alternatives(&points), &[false]), &[false]);

        let first = construct(&model, &constructor, history.entries(), None, seed);
        prop_assume!(first.is_consistent());

        let second = construct(
            &model,
            &constructor,
            history.entries(),
            first.models.as_deref(),
            seed.wrapping_add(1),
        );

        prop_assert!(!second.normalization_updated);
        prop_assert_eq!(second.preserved, 3);
        prop_assert_eq!(second.rejected_between_iterations, 0);
        prop_assert_eq!(second.sampling_attempts(), 0);
        prop_assert_eq!(second.models, first.models);
    }

    // ==================== Inconsistency Handling Properties ====================

    #[test]
    fn pruning_is_monotonic_and_oldest_first(
        points in prop::collection::vec(point(), 2..5),
        flips in prop::collection::vec(any::<bool>(), 1..4),
        protected in prop::collection::vec(any::<bool>(), 1..4),
        seed in any::<u64>()
    ) {
        let mut all = statements(&alternatives(&points), &flips);
        // Guarantee a contradiction
        let contradiction = all[0].reversed();
        all.push(contradiction);
        let history = history(all, &protected);

        let model = ScalarizingModel::weighted_sum();
        let constructor = RejectionSampling::new(2, 200);
        let initial = construct(&model, &constructor, history.entries(), None, seed);
        let space = ObjectiveSpace::unit(2);

        let report = RemoveOldest::exhaustive().resolve(
            ResolutionInput {
                model: &model,
                constructor: &constructor,
                entries: history.entries(),
                previous_population: None,
                objective_space: &space,
                previous_objective_space: None,
                initial,
            },
            &mut StdRng::seed_from_u64(seed),
        );

        let removable = history.removable_ids();
        prop_assert_eq!(report.attempts(), removable.len() + 1);

        for (k, state) in report.states.iter().enumerate() {
            prop_assert_eq!(state.index, k);
            prop_assert_eq!(&state.removed[..], &removable[..k]);
            prop_assert_eq!(state.evidence.len(), history.count() - k);
        }

        match report.states.iter().position(State::is_consistent) {
            Some(first) => {
                prop_assert!(report.is_resolved());
                prop_assert_eq!(report.consistent_state, first);
            }
            None => {
                prop_assert!(!report.is_resolved());
                prop_assert_eq!(report.consistent_state, report.attempts() - 1);
            }
        }
    }

    // ==================== Model System Properties ====================

    #[test]
    fn model_system_is_deterministic(
        points in prop::collection::vec(point(), 2..5),
        flips in prop::collection::vec(any::<bool>(), 1..4),
        seed in any::<u64>()
    ) {
        let run = || {
            let config = SystemConfig::default()
                .population_size(3)
                .max_sampling_attempts(300);
            let mut system =
                ModelSystem::with_config(ScalarizingModel::weighted_sum(), &config).unwrap();
            system
                .register_decision_making_context(DecisionContext::new(
                    0,
                    Criteria::costs(2),
                    ObjectiveSpace::unit(2),
                    StdRng::seed_from_u64(seed),
                ))
                .unwrap();
            system.notify_preference_elicitation_begins().unwrap();
            system
                .notify_about_most_recent_preference_information(statements(
                    &alternatives(&points),
                    &flips,
                ))
                .unwrap();
            system.notify_preference_elicitation_ends().unwrap();
            let report = system.update_model().unwrap();
            let remaining: Vec<EntryId> = system.history().entries().iter().map(HistoryEntry::id).collect();
            (report.outcome(), report.construction.models, remaining)
        };

        prop_assert_eq!(run(), run());
    }
}

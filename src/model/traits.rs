//! Preference model traits
//!
//! A preference model family (for example weighted scalarizing functions)
//! plugs into construction, inconsistency handling and the model system by
//! implementing [`PreferenceModel`]. None of those algorithms know the concrete
//! instance type.

use std::fmt::Debug;

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

use crate::history::statement::PairwiseComparison;
use crate::space::objective_space::ObjectiveSpace;

/// Draws raw model instances for a family
pub trait InstanceSampler<I> {
    /// Sample one instance for the given objective space
    fn sample<R: Rng>(&self, space: &ObjectiveSpace, rng: &mut R) -> I;
}

/// Capability contract of an internal preference model family
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl PreferenceModel for MyModel {
///     type Instance = MyInstance;
///     type Sampler = MySampler;
///
///     fn name(&self) -> &str { "my-model" }
///
///     fn is_feasible(&self, instance: &MyInstance, statement: &PairwiseComparison,
///                    space: &ObjectiveSpace) -> bool {
///         instance.score(statement.first(), space) < instance.score(statement.second(), space)
///     }
///
///     fn sampler(&self) -> &MySampler { &self.sampler }
///     fn current_population(&self) -> Option<&[MyInstance]> { self.population.as_deref() }
///     fn replace_population(&mut self, population: Option<Vec<MyInstance>>) {
///         self.population = population;
///     }
/// }
/// ```
pub trait PreferenceModel {
    /// One sampled instance of the family
    type Instance: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static;

    /// Family-specific generator of raw instances
    type Sampler: InstanceSampler<Self::Instance>;

    /// Short name used in logs
    fn name(&self) -> &str;

    /// Exact feasibility test of `instance` against one statement
    ///
    /// Must be pure: identical arguments always give identical answers.
    fn is_feasible(
        &self,
        instance: &Self::Instance,
        statement: &PairwiseComparison,
        space: &ObjectiveSpace,
    ) -> bool;

    /// Feasibility against every statement of an evidence set
    fn is_feasible_for_all<'a, I>(
        &self,
        instance: &Self::Instance,
        statements: I,
        space: &ObjectiveSpace,
    ) -> bool
    where
        I: IntoIterator<Item = &'a PairwiseComparison>,
    {
        statements
            .into_iter()
            .all(|s| self.is_feasible(instance, s, space))
    }

    /// The raw instance generator
    fn sampler(&self) -> &Self::Sampler;

    /// Population installed by the last successful update
    fn current_population(&self) -> Option<&[Self::Instance]>;

    /// Replace the installed population
    fn replace_population(&mut self, population: Option<Vec<Self::Instance>>);
}

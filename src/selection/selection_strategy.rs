use std::fmt::Debug;

use crate::population::{Individual, Population};
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection policies.
///
/// A selection strategy picks one parent from a scored population. The parent is
/// copied out by value, so picking the same individual twice is allowed.
///
/// # Examples
///
/// ```
/// use sinega::population::Population;
/// use sinega::rng::RandomNumberGenerator;
/// use sinega::selection::{SelectionStrategy, TournamentSelection};
///
/// fn main() -> sinega::error::Result<()> {
///     let population = Population::from_individuals(vec![0.1, 0.85, 0.35])?;
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let selection = TournamentSelection::new(3)?;
///     assert_eq!(selection.select(&population, &mut rng), 0.85);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects one individual from the population.
    fn select(&self, population: &Population, rng: &mut RandomNumberGenerator) -> Individual;
}

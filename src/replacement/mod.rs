//! # Replacement
//!
//! Folds offspring back into the population once per generation. Two disciplines
//! are available:
//!
//! - [`GenerationalReplacement`] builds a whole new population, carrying the
//!   fittest individuals over unchanged.
//! - [`SteadyStateReplacement`] overwrites the current worst individual a fixed
//!   number of times, rescoring after each overwrite.
pub mod generational;
pub mod steady_state;

use std::fmt::Debug;

use crate::{
    breeding::Breeder, error::Result, evolution::options::EvolutionOptions,
    population::Population, rng::RandomNumberGenerator,
};

pub use generational::GenerationalReplacement;
pub use steady_state::SteadyStateReplacement;

/// Trait for population update disciplines.
pub trait ReplacementStrategy: Debug + Send + Sync {
    /// Advances `population` by one generation.
    ///
    /// Returns the indices that received a new offspring, in the order they were
    /// written. An index may repeat if it was overwritten more than once.
    fn advance(
        &self,
        population: &mut Population,
        breeder: &Breeder,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>>;
}

/// The discipline chosen by the steady-state flag of the options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    Generational(GenerationalReplacement),
    SteadyState(SteadyStateReplacement),
}

impl Replacement {
    pub fn from_options(options: &EvolutionOptions) -> Self {
        if options.is_steady_state() {
            Self::SteadyState(SteadyStateReplacement::new(options.get_num_replacements()))
        } else {
            Self::Generational(GenerationalReplacement::new(options.get_elite_size()))
        }
    }
}

impl ReplacementStrategy for Replacement {
    fn advance(
        &self,
        population: &mut Population,
        breeder: &Breeder,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        match self {
            Self::Generational(strategy) => strategy.advance(population, breeder, rng),
            Self::SteadyState(strategy) => strategy.advance(population, breeder, rng),
        }
    }
}

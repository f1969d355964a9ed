use crate::population::{Individual, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Picks an individual uniformly at random, ignoring fitness.
#[derive(Debug, Clone, Default)]
pub struct RandomSelection;

impl RandomSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for RandomSelection {
    fn select(&self, population: &Population, rng: &mut RandomNumberGenerator) -> Individual {
        population.get(rng.index(population.len()))
    }
}

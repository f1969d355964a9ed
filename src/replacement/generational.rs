use crate::{
    breeding::Breeder,
    error::Result,
    population::{Individual, Population},
    rng::RandomNumberGenerator,
};

use super::ReplacementStrategy;

/// Generational replacement with elitism.
///
/// The `elite_size` fittest individuals are copied into the next population
/// unchanged, best first; among equal fitness the higher index goes first. The rest
/// of the population is filled with offspring bred from the current generation, and
/// the whole population is swapped in at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationalReplacement {
    elite_size: usize,
}

impl GenerationalReplacement {
    pub fn new(elite_size: usize) -> Self {
        Self { elite_size }
    }

    pub fn elite_size(&self) -> usize {
        self.elite_size
    }

    /// Builds the next generation without touching `population`.
    pub fn next_generation(
        &self,
        population: &Population,
        breeder: &Breeder,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let size = population.len();
        let mut next: Vec<Individual> = Vec::with_capacity(size);

        next.extend(
            population
                .elite_indices(self.elite_size)
                .into_iter()
                .map(|idx| population.get(idx)),
        );

        while next.len() < size {
            next.push(breeder.offspring(population, rng));
        }

        Population::from_individuals(next)
    }
}

impl ReplacementStrategy for GenerationalReplacement {
    fn advance(
        &self,
        population: &mut Population,
        breeder: &Breeder,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        *population = self.next_generation(population, breeder, rng)?;
        let carried = self.elite_size.min(population.len());
        Ok((carried..population.len()).collect())
    }
}

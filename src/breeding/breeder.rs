use crate::{
    evolution::options::EvolutionOptions,
    population::{Individual, Population},
    rng::RandomNumberGenerator,
    selection::{SelectionMethod, SelectionStrategy},
};

use super::{CrossoverMethod, MutationMethod};

/// Bundles the operators and rates of a run and turns a population into offspring.
///
/// # Example
///
/// ```rust
/// use sinega::breeding::Breeder;
/// use sinega::evolution::EvolutionOptions;
/// use sinega::population::Population;
/// use sinega::rng::RandomNumberGenerator;
///
/// let options = EvolutionOptions::default();
/// let breeder = Breeder::from_options(&options);
/// let mut rng = RandomNumberGenerator::from_seed(3);
///
/// let population = Population::random(10, &mut rng)?;
/// let child = breeder.offspring(&population, &mut rng);
/// assert!((0.0..=1.0).contains(&child));
/// # Ok::<(), sinega::error::GeneticError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Breeder {
    selection: SelectionMethod,
    crossover: CrossoverMethod,
    mutation: MutationMethod,
    crossover_rate: f64,
    mutation_rate: f64,
    genome_bits: u32,
}

impl Breeder {
    pub fn from_options(options: &EvolutionOptions) -> Self {
        Self {
            selection: options.get_selection(),
            crossover: options.get_crossover(),
            mutation: options.get_mutation(),
            crossover_rate: options.get_crossover_rate(),
            mutation_rate: options.get_mutation_rate(),
            genome_bits: options.get_genome_bits(),
        }
    }

    /// Selects one parent.
    pub fn select(&self, population: &Population, rng: &mut RandomNumberGenerator) -> Individual {
        self.selection.select(population, rng)
    }

    pub fn crossover(
        &self,
        parent1: Individual,
        parent2: Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Individual {
        self.crossover
            .crossover(parent1, parent2, self.crossover_rate, rng)
    }

    pub fn mutate(&self, individual: Individual, rng: &mut RandomNumberGenerator) -> Individual {
        self.mutation
            .mutate(individual, self.mutation_rate, self.genome_bits, rng)
    }

    /// Selects two parents, recombines them and mutates the child.
    pub fn offspring(&self, population: &Population, rng: &mut RandomNumberGenerator) -> Individual {
        let parent1 = self.select(population, rng);
        let parent2 = self.select(population, rng);
        let child = self.crossover(parent1, parent2, rng);
        self.mutate(child, rng)
    }
}

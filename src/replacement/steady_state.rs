use crate::{
    breeding::Breeder, error::Result, population::Population, rng::RandomNumberGenerator,
};

use super::ReplacementStrategy;

/// Steady-state replacement.
///
/// Repeats `num_replacements` times: breed one offspring from the live population,
/// overwrite the current worst individual with it and rescore that slot. Later
/// iterations of the same generation therefore select from, and look for the worst
/// among, the already updated population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteadyStateReplacement {
    num_replacements: usize,
}

impl SteadyStateReplacement {
    pub fn new(num_replacements: usize) -> Self {
        Self { num_replacements }
    }

    pub fn num_replacements(&self) -> usize {
        self.num_replacements
    }

    /// Overwrites the worst individual once and returns its index.
    pub fn replace_worst(
        &self,
        population: &mut Population,
        breeder: &Breeder,
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let child = breeder.offspring(population, rng);
        let worst = population.worst_index();
        population.replace(worst, child);
        worst
    }
}

impl ReplacementStrategy for SteadyStateReplacement {
    fn advance(
        &self,
        population: &mut Population,
        breeder: &Breeder,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        Ok((0..self.num_replacements)
            .map(|_| self.replace_worst(population, breeder, rng))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::options::EvolutionOptions;

    fn breeder_from(builder: crate::evolution::options::EvolutionOptionsBuilder) -> Breeder {
        Breeder::from_options(&builder.build().unwrap())
    }

    #[test]
    fn test_worst_is_overwritten() {
        // With no variation and a full tournament, every child is a copy of the best.
        let breeder = breeder_from(
            EvolutionOptions::builder()
                .population_size(4)
                .selection("tournament")
                .tournament_size(4)
                .crossover_rate(0.0)
                .mutation_rate(0.0),
        );
        let mut rng = RandomNumberGenerator::from_seed(19);
        let mut population = Population::from_individuals(vec![0.25, 0.35, 0.85, 0.65]).unwrap();

        let idx = SteadyStateReplacement::new(1).replace_worst(&mut population, &breeder, &mut rng);

        assert_eq!(idx, 1);
        assert_eq!(population.get(1), 0.85);
        assert_eq!(population.fitness_of(1), population.fitness_of(2));
    }

    #[test]
    fn test_each_replacement_sees_updated_fitness() {
        let breeder = breeder_from(
            EvolutionOptions::builder()
                .population_size(4)
                .selection("tournament")
                .tournament_size(4)
                .crossover_rate(0.0)
                .mutation_rate(0.0),
        );
        let mut rng = RandomNumberGenerator::from_seed(19);
        // Fitness: 1.25, 0.65, 1.85, 1.65
        let mut population = Population::from_individuals(vec![0.25, 0.35, 0.85, 0.65]).unwrap();

        let written = SteadyStateReplacement::new(3)
            .advance(&mut population, &breeder, &mut rng)
            .unwrap();

        // 0.35 goes first, then 0.25, then 0.65.
        assert_eq!(written, vec![1, 0, 3]);
        assert!(population.individuals().iter().all(|&x| x == 0.85));
    }

    #[test]
    fn test_population_size_is_preserved() {
        let breeder = breeder_from(EvolutionOptions::builder().mutation("gaussian"));
        let mut rng = RandomNumberGenerator::from_seed(19);
        let mut population = Population::random(10, &mut rng).unwrap();

        let written = SteadyStateReplacement::new(7)
            .advance(&mut population, &breeder, &mut rng)
            .unwrap();

        assert_eq!(written.len(), 7);
        assert_eq!(population.len(), 10);
        assert_eq!(
            population.fitness(),
            crate::fitness::evaluate(population.individuals()).as_slice()
        );
    }

    #[test]
    fn test_same_slot_can_be_replaced_repeatedly() {
        // A bad child keeps landing in the same worst slot.
        let breeder = breeder_from(
            EvolutionOptions::builder()
                .population_size(3)
                .crossover_rate(0.0)
                .mutation_rate(1.0)
                .mutation("swap"),
        );
        let mut rng = RandomNumberGenerator::from_seed(19);
        let mut population = Population::from_individuals(vec![0.0, 0.0, 0.0]).unwrap();

        let written = SteadyStateReplacement::new(4)
            .advance(&mut population, &breeder, &mut rng)
            .unwrap();

        // Swapping bits of 0 keeps 0, so every slot ties and the first one is reused.
        assert_eq!(written, vec![0, 0, 0, 0]);
        assert_eq!(population.len(), 3);
    }
}

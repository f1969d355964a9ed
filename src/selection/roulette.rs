use crate::population::{Individual, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Floor given to the least fit individual's weight.
const WEIGHT_FLOOR: f64 = 0.1;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. Fitness values are
/// shifted so the minimum becomes 0.1 first, which keeps every weight strictly
/// positive even for negative or all-equal fitness.
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Shifted weights, one per individual.
    fn weights(fitness: &[f64]) -> Vec<f64> {
        let min_fitness = fitness.iter().copied().fold(f64::INFINITY, f64::min);
        fitness
            .iter()
            .map(|&f| f - min_fitness + WEIGHT_FLOOR)
            .collect()
    }

    /// Walks the wheel and returns the index whose cumulative weight first reaches
    /// `threshold`. Falls back to the last index if rounding exhausts the walk.
    fn spin(weights: &[f64], threshold: f64) -> usize {
        let mut cumulative = 0.0;
        for (i, &weight) in weights.iter().enumerate() {
            cumulative += weight;
            if cumulative >= threshold {
                return i;
            }
        }
        weights.len() - 1
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(&self, population: &Population, rng: &mut RandomNumberGenerator) -> Individual {
        let weights = Self::weights(population.fitness());
        let total: f64 = weights.iter().sum();
        let threshold = rng.uniform() * total;

        population.get(Self::spin(&weights, threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roulette_wheel_selection_membership() {
        let population = Population::from_individuals(vec![0.1, 0.2, 0.35, 0.85, 0.95]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = RouletteWheelSelection::new();
        for _ in 0..200 {
            let selected = selection.select(&population, &mut rng);
            assert!(population.individuals().contains(&selected));
        }
    }

    #[test]
    fn test_weights_floor_at_minimum() {
        let weights = RouletteWheelSelection::weights(&[-2.0, 0.0, 1.0]);
        assert!((weights[0] - 0.1).abs() < 1e-12);
        assert!((weights[1] - 2.1).abs() < 1e-12);
        assert!((weights[2] - 3.1).abs() < 1e-12);
    }

    #[test]
    fn test_equal_fitness_gives_equal_weights() {
        let weights = RouletteWheelSelection::weights(&[1.0, 1.0, 1.0]);
        assert!(weights.iter().all(|&w| (w - 0.1).abs() < 1e-12));
    }

    #[test]
    fn test_spin() {
        let weights = [0.1, 0.5, 0.4];
        assert_eq!(RouletteWheelSelection::spin(&weights, 0.0), 0);
        assert_eq!(RouletteWheelSelection::spin(&weights, 0.1), 0);
        assert_eq!(RouletteWheelSelection::spin(&weights, 0.3), 1);
        assert_eq!(RouletteWheelSelection::spin(&weights, 0.95), 2);
        // Beyond the total, rounding fallback picks the last individual.
        assert_eq!(RouletteWheelSelection::spin(&weights, 5.0), 2);
    }

    #[test]
    fn test_fitter_individuals_win_more_often() {
        // f(0.85) ~ 1.85, f(0.35) = 0.65
        let population = Population::from_individuals(vec![0.35, 0.85]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selection = RouletteWheelSelection::new();
        let wins = (0..2000)
            .filter(|_| selection.select(&population, &mut rng) == 0.85)
            .count();
        assert!(wins > 1600, "wins = {}", wins);
    }

    #[test]
    fn test_single_individual() {
        let population = Population::from_individuals(vec![0.3]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);
        assert_eq!(RouletteWheelSelection::new().select(&population, &mut rng), 0.3);
    }
}

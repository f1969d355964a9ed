use crate::population::{Individual, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals based on their rank in the population.
///
/// Individuals are sorted by ascending fitness and weighted `1..=N`, so the best
/// individual carries weight `N`. Only the ordering of fitness values matters, which
/// helps prevent premature convergence when one individual is far ahead of the rest.
#[derive(Debug, Clone, Default)]
pub struct RankBasedSelection;

impl RankBasedSelection {
    pub fn new() -> Self {
        Self
    }

    /// Returns the position in `order` whose cumulative rank weight first reaches
    /// `threshold`, or the best-ranked position if the walk is exhausted.
    fn spin(population_size: usize, threshold: f64) -> usize {
        let mut cumulative = 0.0;
        for rank in 0..population_size {
            cumulative += (rank + 1) as f64;
            if cumulative >= threshold {
                return rank;
            }
        }
        population_size - 1
    }
}

impl SelectionStrategy for RankBasedSelection {
    fn select(&self, population: &Population, rng: &mut RandomNumberGenerator) -> Individual {
        let order = population.ascending_order();
        let n = order.len() as f64;
        let total_rank = n * (n + 1.0) / 2.0;
        let threshold = rng.uniform() * total_rank;

        population.get(order[Self::spin(order.len(), threshold)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_selection_membership() {
        let population = Population::from_individuals(vec![0.1, 0.2, 0.35, 0.85, 0.95]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = RankBasedSelection::new();
        for _ in 0..200 {
            let selected = selection.select(&population, &mut rng);
            assert!(population.individuals().contains(&selected));
        }
    }

    #[test]
    fn test_spin() {
        // Cumulative weights for N = 4: 1, 3, 6, 10
        assert_eq!(RankBasedSelection::spin(4, 0.0), 0);
        assert_eq!(RankBasedSelection::spin(4, 1.0), 0);
        assert_eq!(RankBasedSelection::spin(4, 2.5), 1);
        assert_eq!(RankBasedSelection::spin(4, 6.0), 2);
        assert_eq!(RankBasedSelection::spin(4, 9.9), 3);
        assert_eq!(RankBasedSelection::spin(4, 11.0), 3);
    }

    #[test]
    fn test_best_ranked_is_favoured() {
        // Ranks: 0.35 -> 1, 0.25 -> 2, 0.85 -> 3
        let population = Population::from_individuals(vec![0.85, 0.35, 0.25]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(8);

        let selection = RankBasedSelection::new();
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            let picked = selection.select(&population, &mut rng);
            let idx = population
                .individuals()
                .iter()
                .position(|&x| x == picked)
                .unwrap();
            counts[idx] += 1;
        }

        // Expected shares are 3/6, 1/6 and 2/6.
        assert!(counts[0] > counts[2]);
        assert!(counts[2] > counts[1]);
    }

    #[test]
    fn test_equal_fitness_is_handled() {
        let population = Population::from_individuals(vec![0.0, 0.0, 0.0]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);
        assert_eq!(RankBasedSelection::new().select(&population, &mut rng), 0.0);
    }

    #[test]
    fn test_single_individual() {
        let population = Population::from_individuals(vec![0.7]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);
        assert_eq!(RankBasedSelection::new().select(&population, &mut rng), 0.7);
    }
}

use crate::error::{GeneticError, Result};
use crate::population::{Individual, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament samples `tournament_size` distinct individuals uniformly without
/// replacement and returns the fittest of them. The first sampled participant wins
/// a tie.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// A tournament larger than the population is capped at the population size, so
/// it always returns the fittest individual.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSelection {
    pub(crate) tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::InvalidConfiguration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let participants = rng.distinct_indices(fitness.len(), self.tournament_size.max(1));

        let mut best_idx = participants[0];
        for &idx in &participants[1..] {
            if fitness[idx] > fitness[best_idx] {
                best_idx = idx;
            }
        }

        best_idx
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(&self, population: &Population, rng: &mut RandomNumberGenerator) -> Individual {
        population.get(self.run_tournament(population.fitness(), rng))
    }
}

//! # Population
//!
//! A `Population` owns the individuals of one generation together with their
//! fitness values. The two vectors are index-aligned at all times: the only way
//! to change an individual is [`Population::replace`], which rescores it on the
//! spot.
//!
//! With the `serde` feature a population serializes as its list of individuals
//! and deserializes through [`Population::from_individuals`], so fitness is
//! always recomputed and an empty list is rejected.
//!
//! ## Example
//!
//! ```rust
//! use sinega::population::Population;
//!
//! let population = Population::from_individuals(vec![0.1, 0.85, 0.4])?;
//! assert_eq!(population.best_index(), 1);
//! assert_eq!(population.len(), 3);
//! # Ok::<(), sinega::error::GeneticError>(())
//! ```

use std::cmp::Ordering;

use crate::{
    error::{GeneticError, OptionExt, Result},
    fitness::{evaluate, fitness},
    rng::RandomNumberGenerator,
};

/// One candidate solution, a value in `[0, 1]`.
pub type Individual = f64;

#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Individual>", into = "Vec<Individual>")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
    fitness: Vec<f64>,
}

impl Population {
    /// Scores the given individuals.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `individuals` is empty.
    pub fn from_individuals(individuals: Vec<Individual>) -> Result<Self> {
        individuals
            .first()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        let fitness = evaluate(&individuals);
        Ok(Self {
            individuals,
            fitness,
        })
    }

    /// Draws `size` individuals uniformly from `[0, 1)`.
    pub fn random(size: usize, rng: &mut RandomNumberGenerator) -> Result<Self> {
        Self::from_individuals(rng.fetch_uniform(0.0, 1.0, size))
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn get(&self, index: usize) -> Individual {
        self.individuals[index]
    }

    pub fn fitness_of(&self, index: usize) -> f64 {
        self.fitness[index]
    }

    /// Recomputes every fitness value from scratch.
    pub fn evaluate(&mut self) {
        self.fitness = evaluate(&self.individuals);
    }

    /// Overwrites the individual at `index` and rescores that slot only.
    pub fn replace(&mut self, index: usize, individual: Individual) {
        self.individuals[index] = individual;
        self.fitness[index] = fitness(individual);
    }

    /// Index of the fittest individual. The first one wins on ties.
    pub fn best_index(&self) -> usize {
        self.fitness
            .iter()
            .enumerate()
            .fold(0, |best, (i, &f)| if f > self.fitness[best] { i } else { best })
    }

    /// Index of the least fit individual. The first one wins on ties.
    pub fn worst_index(&self) -> usize {
        self.fitness
            .iter()
            .enumerate()
            .fold(0, |worst, (i, &f)| if f < self.fitness[worst] { i } else { worst })
    }

    pub fn best(&self) -> (Individual, f64) {
        let idx = self.best_index();
        (self.individuals[idx], self.fitness[idx])
    }

    pub fn average_fitness(&self) -> f64 {
        self.fitness.iter().sum::<f64>() / self.fitness.len() as f64
    }

    /// Indices sorted by ascending fitness. The sort is stable, so equal
    /// fitness keeps the original index order.
    pub fn ascending_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| {
            self.fitness[a]
                .partial_cmp(&self.fitness[b])
                .unwrap_or(Ordering::Equal)
        });
        order
    }

    /// The `count` fittest indices, best first.
    ///
    /// Taken from the tail of the ascending order and reversed, so among equal
    /// fitness values the higher index comes first. `count` is capped at the
    /// population size.
    pub fn elite_indices(&self, count: usize) -> Vec<usize> {
        let order = self.ascending_order();
        let count = count.min(order.len());
        order[order.len() - count..].iter().rev().copied().collect()
    }
}

impl TryFrom<Vec<Individual>> for Population {
    type Error = GeneticError;

    fn try_from(individuals: Vec<Individual>) -> Result<Self> {
        Self::from_individuals(individuals)
    }
}

impl From<Population> for Vec<Individual> {
    fn from(population: Population) -> Self {
        population.individuals
    }
}

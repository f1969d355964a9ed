use tracing::{debug, info};

use super::options::{EvolutionOptions, LogLevel};
use crate::{
    breeding::Breeder,
    error::Result,
    population::{Individual, Population},
    replacement::{Replacement, ReplacementStrategy},
    rng::RandomNumberGenerator,
};

/// Best and average fitness, one entry per completed generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunHistory {
    pub best: Vec<f64>,
    pub average: Vec<f64>,
}

impl RunHistory {
    pub fn with_capacity(generations: usize) -> Self {
        Self {
            best: Vec::with_capacity(generations),
            average: Vec::with_capacity(generations),
        }
    }

    pub fn record(&mut self, best: f64, average: f64) {
        self.best.push(best);
        self.average.push(average);
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Best fitness seen so far, per generation.
    pub fn running_best(&self) -> Vec<f64> {
        self.best
            .iter()
            .scan(f64::NEG_INFINITY, |max, &f| {
                *max = max.max(f);
                Some(*max)
            })
            .collect()
    }
}

/// Emitted once at the end of every generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    /// 1-based.
    pub generation: usize,
    pub best_fitness: f64,
    pub best_individual: Individual,
    pub average_fitness: f64,
}

/// Represents the result of an evolution: the best individual of the final
/// population, its fitness, and the per-generation history.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    pub individual: Individual,
    pub fitness: f64,
    pub history: RunHistory,
}

/// Runs the evolutionary loop described by a set of options.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher {
    options: EvolutionOptions,
    breeder: Breeder,
    replacement: Replacement,
}

impl EvolutionLauncher {
    /// Creates a launcher for already validated options.
    pub fn new(options: EvolutionOptions) -> Self {
        Self {
            breeder: Breeder::from_options(&options),
            replacement: Replacement::from_options(&options),
            options,
        }
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Evolves a random population for the configured number of generations.
    ///
    /// # Errors
    ///
    /// Fails only if the options do not validate.
    pub fn evolve(&self, rng: &mut RandomNumberGenerator) -> Result<EvolutionResult> {
        self.evolve_with_observer(rng, |_| {})
    }

    /// Like [`evolve`](Self::evolve), calling `observer` after every generation.
    ///
    /// Each generation scores the population, records its best and average
    /// fitness, reports, and then replaces. There is no early stopping. After the
    /// last generation the final population is scored once more and its best
    /// individual is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sinega::evolution::{EvolutionLauncher, EvolutionOptions, LogLevel};
    /// use sinega::rng::RandomNumberGenerator;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(10)
    ///     .log_level(LogLevel::None)
    ///     .build()?;
    /// let launcher = EvolutionLauncher::new(options);
    ///
    /// let mut generations = Vec::new();
    /// let result = launcher.evolve_with_observer(
    ///     &mut RandomNumberGenerator::from_seed(1),
    ///     |report| generations.push(report.generation),
    /// )?;
    ///
    /// assert_eq!(generations, (1..=10).collect::<Vec<_>>());
    /// assert_eq!(result.history.len(), 10);
    /// # Ok::<(), sinega::error::GeneticError>(())
    /// ```
    pub fn evolve_with_observer<F>(
        &self,
        rng: &mut RandomNumberGenerator,
        mut observer: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport),
    {
        self.options.validate()?;

        let generations = self.options.get_num_generations();
        let log_level = self.options.get_log_level();
        let mut population = Population::random(self.options.get_population_size(), rng)?;
        let mut history = RunHistory::with_capacity(generations);

        for generation in 1..=generations {
            population.evaluate();

            let (best_individual, best_fitness) = population.best();
            let average_fitness = population.average_fitness();
            history.record(best_fitness, average_fitness);

            let report = GenerationReport {
                generation,
                best_fitness,
                best_individual,
                average_fitness,
            };
            self.log_generation(&report, log_level);
            observer(&report);

            let written = self.replacement.advance(&mut population, &self.breeder, rng)?;
            if log_level == LogLevel::Verbose {
                self.log_replacement(generation, &written);
            }
        }

        population.evaluate();
        let (individual, fitness) = population.best();

        if log_level != LogLevel::None {
            info!(best_x = individual, best_fitness = fitness, "evolution finished");
        }

        Ok(EvolutionResult {
            individual,
            fitness,
            history,
        })
    }

    fn log_replacement(&self, generation: usize, written: &[usize]) {
        if self.options.is_steady_state() {
            for (step, &slot) in written.iter().enumerate() {
                debug!(
                    generation,
                    step = step + 1,
                    slot,
                    "replaced worst individual"
                );
            }
        } else {
            debug!(
                generation,
                elites = self.options.get_elite_size(),
                offspring = written.len(),
                "elites carried"
            );
        }
    }

    fn log_generation(&self, report: &GenerationReport, log_level: LogLevel) {
        match log_level {
            LogLevel::None => {}
            LogLevel::Minimal => info!(
                "Gen {:03} | Best: {:.4} at x={:.4}",
                report.generation, report.best_fitness, report.best_individual
            ),
            LogLevel::Verbose => {
                info!(
                    "Gen {:03} | Best: {:.4} at x={:.4}",
                    report.generation, report.best_fitness, report.best_individual
                );
                debug!(
                    generation = report.generation,
                    average_fitness = report.average_fitness,
                    selection = %self.options.get_selection(),
                    crossover = %self.options.get_crossover(),
                    mutation = %self.options.get_mutation(),
                    "generation statistics"
                );
            }
        }
    }
}

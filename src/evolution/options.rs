//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct is the immutable configuration of one run. Policy
//! names arrive as strings and are resolved to their enums once, when the options
//! are built; every numeric field is validated at the same time, so a run never
//! starts from an invalid configuration.
//!
//! ## Example
//!
//! ```rust
//! use sinega::evolution::options::{EvolutionOptions, LogLevel};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(30)
//!     .num_generations(50)
//!     .elite_size(2)
//!     .selection("tournament")
//!     .tournament_size(3)
//!     .crossover("arithmetic")
//!     .mutation("gaussian")
//!     .log_level(LogLevel::None)
//!     .build()?;
//!
//! assert_eq!(options.get_population_size(), 30);
//!
//! // Out-of-range values are rejected before anything runs.
//! assert!(EvolutionOptions::builder().mutation_rate(1.5).build().is_err());
//! # Ok::<(), sinega::error::GeneticError>(())
//! ```
//!
//! ## Defaults
//!
//! | field | default |
//! |---|---|
//! | population size | 30 |
//! | generations | 100 |
//! | elite size | 0 |
//! | crossover rate | 0.8 |
//! | mutation rate | 0.1 |
//! | selection | `roulette` |
//! | crossover | `arithmetic` |
//! | mutation | `gaussian` |
//! | tournament size | 3 |
//! | steady state | off |
//! | replacements per generation | 1 |
//! | genome bits | 8 |
//! | log level | `Minimal` |

use tracing::warn;

use crate::{
    breeding::{CrossoverMethod, MutationMethod},
    codec::DEFAULT_GENOME_BITS,
    error::{GeneticError, Result},
    selection::SelectionMethod,
};

/// How much the launcher reports through `tracing`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Per-generation summary plus population statistics and replacement details.
    Verbose,
    /// One line per generation.
    Minimal,
    None,
}

/// The configuration of one run.
///
/// With the `serde` feature, deserialized options are validated exactly like
/// [`EvolutionOptionsBuilder::build`] validates them.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedOptions")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    num_generations: usize,
    elite_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    selection: SelectionMethod,
    crossover: CrossoverMethod,
    mutation: MutationMethod,
    tournament_size: usize,
    steady_state: bool,
    num_replacements: usize,
    genome_bits: u32,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_elite_size(&self) -> usize {
        self.elite_size
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_selection(&self) -> SelectionMethod {
        self.selection
    }

    pub fn get_crossover(&self) -> CrossoverMethod {
        self.crossover
    }

    pub fn get_mutation(&self) -> MutationMethod {
        self.mutation
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn is_steady_state(&self) -> bool {
        self.steady_state
    }

    pub fn get_num_replacements(&self) -> usize {
        self.num_replacements
    }

    /// Codec width used by the discrete mutations.
    pub fn get_genome_bits(&self) -> u32 {
        self.genome_bits
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidConfiguration` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return invalid("Population size must be at least 1".to_string());
        }

        if self.num_generations == 0 {
            return invalid("Number of generations must be at least 1".to_string());
        }

        if self.elite_size > self.population_size {
            return invalid(format!(
                "Elite size ({}) cannot exceed population size ({})",
                self.elite_size, self.population_size
            ));
        }

        check_rate("Crossover rate", self.crossover_rate)?;
        check_rate("Mutation rate", self.mutation_rate)?;

        if self.tournament_size == 0 {
            return invalid("Tournament size must be at least 1".to_string());
        }

        if let SelectionMethod::Tournament { size } = self.selection {
            if size == 0 {
                return invalid("Tournament size must be at least 1".to_string());
            }
            if size > self.population_size {
                return invalid(format!(
                    "Tournament size ({}) cannot exceed population size ({})",
                    size, self.population_size
                ));
            }
        }

        if self.num_replacements == 0 {
            return invalid("Number of replacements must be at least 1".to_string());
        }

        if !(2..=32).contains(&self.genome_bits) {
            return invalid(format!(
                "Genome width must be between 2 and 32 bits, got {}",
                self.genome_bits
            ));
        }

        Ok(())
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 30,
            num_generations: 100,
            elite_size: 0,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            selection: SelectionMethod::Roulette,
            crossover: CrossoverMethod::Arithmetic,
            mutation: MutationMethod::Gaussian,
            tournament_size: 3,
            steady_state: false,
            num_replacements: 1,
            genome_bits: DEFAULT_GENOME_BITS,
            log_level: LogLevel::Minimal,
        }
    }
}

/// Field-for-field mirror of `EvolutionOptions` read before validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedOptions {
    population_size: usize,
    num_generations: usize,
    elite_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    selection: SelectionMethod,
    crossover: CrossoverMethod,
    mutation: MutationMethod,
    tournament_size: usize,
    steady_state: bool,
    num_replacements: usize,
    genome_bits: u32,
    log_level: LogLevel,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedOptions> for EvolutionOptions {
    type Error = GeneticError;

    fn try_from(raw: UncheckedOptions) -> Result<Self> {
        let options = Self {
            population_size: raw.population_size,
            num_generations: raw.num_generations,
            elite_size: raw.elite_size,
            crossover_rate: raw.crossover_rate,
            mutation_rate: raw.mutation_rate,
            selection: raw.selection,
            crossover: raw.crossover,
            mutation: raw.mutation,
            tournament_size: raw.tournament_size,
            steady_state: raw.steady_state,
            num_replacements: raw.num_replacements,
            genome_bits: raw.genome_bits,
            log_level: raw.log_level,
        };
        options.validate()?;
        Ok(options)
    }
}

fn invalid(message: String) -> Result<()> {
    warn!(%message, "rejecting evolution options");
    Err(GeneticError::InvalidConfiguration(message))
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return invalid(format!("{} must be within [0, 1], got {}", name, rate));
    }
    Ok(())
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    elite_size: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    selection: Option<String>,
    crossover: Option<String>,
    mutation: Option<String>,
    tournament_size: Option<usize>,
    steady_state: Option<bool>,
    num_replacements: Option<usize>,
    genome_bits: Option<u32>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Number of fittest individuals carried unchanged into the next generation.
    pub fn elite_size(mut self, value: usize) -> Self {
        self.elite_size = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// One of `roulette`, `tournament`, `rank`, `random`. Anything else selects by
    /// a tournament of three.
    pub fn selection(mut self, name: impl Into<String>) -> Self {
        self.selection = Some(name.into());
        self
    }

    /// One of `single`, `uniform`, `arithmetic`, `two-point`. Anything else takes
    /// the midpoint of both parents.
    pub fn crossover(mut self, name: impl Into<String>) -> Self {
        self.crossover = Some(name.into());
        self
    }

    /// One of `swap`, `scramble`, `inversion`, `gaussian`, `random`, `bitflip`.
    /// Anything else adds uniform noise in `[-0.05, 0.05)`.
    pub fn mutation(mut self, name: impl Into<String>) -> Self {
        self.mutation = Some(name.into());
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn steady_state(mut self, value: bool) -> Self {
        self.steady_state = Some(value);
        self
    }

    /// Replacements per generation in steady-state mode.
    pub fn num_replacements(mut self, value: usize) -> Self {
        self.num_replacements = Some(value);
        self
    }

    pub fn genome_bits(mut self, value: u32) -> Self {
        self.genome_bits = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Resolves the policy names and validates the result.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidConfiguration` if any field is out of range.
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        let tournament_size = self.tournament_size.unwrap_or(defaults.tournament_size);

        let options = EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            elite_size: self.elite_size.unwrap_or(defaults.elite_size),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            selection: match self.selection {
                Some(name) => SelectionMethod::from_name(&name, tournament_size),
                None => defaults.selection,
            },
            crossover: self
                .crossover
                .map_or(defaults.crossover, |name| CrossoverMethod::from_name(&name)),
            mutation: self
                .mutation
                .map_or(defaults.mutation, |name| MutationMethod::from_name(&name)),
            tournament_size,
            steady_state: self.steady_state.unwrap_or(defaults.steady_state),
            num_replacements: self.num_replacements.unwrap_or(defaults.num_replacements),
            genome_bits: self.genome_bits.unwrap_or(defaults.genome_bits),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        };

        options.validate()?;
        Ok(options)
    }
}

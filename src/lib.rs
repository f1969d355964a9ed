//! # sinega
//!
//! A configurable genetic algorithm that searches `[0, 1]` for the maximum of
//! `f(x) = x * sin(10 * pi * x) + 1`.
//!
//! ```rust
//! use sinega::evolution::{EvolutionLauncher, EvolutionOptions, LogLevel};
//! use sinega::rng::RandomNumberGenerator;
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(30)
//!     .num_generations(50)
//!     .elite_size(2)
//!     .selection("tournament")
//!     .crossover("arithmetic")
//!     .mutation("gaussian")
//!     .log_level(LogLevel::None)
//!     .build()?;
//!
//! let result = EvolutionLauncher::new(options).evolve(&mut RandomNumberGenerator::from_seed(42))?;
//! assert_eq!(result.history.len(), 50);
//! # Ok::<(), sinega::error::GeneticError>(())
//! ```
pub mod breeding;
pub mod codec;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod population;
pub mod replacement;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel};

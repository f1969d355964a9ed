pub mod launcher;
pub mod options;

pub use launcher::{EvolutionLauncher, EvolutionResult, GenerationReport, RunHistory};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};

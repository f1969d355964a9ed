//! # Breeding
//!
//! Produces offspring from a scored population: two parents are selected, recombined
//! into one child, and the child is mutated.
pub mod breeder;
pub mod crossover;
pub mod mutation;

pub use breeder::Breeder;
pub use crossover::CrossoverMethod;
pub use mutation::MutationMethod;

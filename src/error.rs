//! # Error Types
//!
//! This module defines the error type for the optimizer. The evolutionary
//! operators themselves never fail; errors only arise when a configuration is
//! rejected before a run starts, or when a population would be empty.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use sinega::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(GeneticError::InvalidConfiguration(format!(
//!             "rate {} is outside [0, 1]",
//!             rate
//!         )));
//!     }
//!     Ok(rate)
//! }
//!
//! assert!(check_rate(0.5).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use sinega::error::{GeneticError, OptionExt};
//!
//! fn first_candidate(candidates: &[f64]) -> sinega::error::Result<f64> {
//!     candidates.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(first_candidate(&[0.85]), Ok(0.85));
//! assert_eq!(first_candidate(&[]), Err(GeneticError::EmptyPopulation));
//! ```

use thiserror::Error;

/// Represents errors that can occur in the optimizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A configuration value is missing or out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for optimizer operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for `Option` to convert to `Result` with a `GeneticError`.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T>`, building the error lazily.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

//! # Crossover
//!
//! Recombination of two scalar parents into one offspring. With only one gene per
//! individual, the policies differ in how they pick or blend the two values:
//!
//! - `single` and `uniform` return either parent with equal probability. The two
//!   names behave identically.
//! - `arithmetic` returns the blend `a * p1 + (1 - a) * p2` for a uniform `a`,
//!   clamped to `[0, 1]`.
//! - `two-point` returns `p1` with probability 0.33; otherwise a second draw
//!   returns the midpoint or `p2` with equal odds.
//! - any other name returns the unclamped midpoint.

use std::fmt;

use crate::population::Individual;
use crate::rng::RandomNumberGenerator;

const TWO_POINT_FIRST_PARENT: f64 = 0.33;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverMethod {
    Single,
    Uniform,
    Arithmetic,
    TwoPoint,
    Fallback,
}

impl CrossoverMethod {
    pub fn from_name(name: &str) -> Self {
        match name {
            "single" => Self::Single,
            "uniform" => Self::Uniform,
            "arithmetic" => Self::Arithmetic,
            "two-point" => Self::TwoPoint,
            _ => Self::Fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Uniform => "uniform",
            Self::Arithmetic => "arithmetic",
            Self::TwoPoint => "two-point",
            Self::Fallback => "fallback",
        }
    }

    /// Recombines with probability `rate`; otherwise `parent1` is cloned.
    pub fn crossover(
        &self,
        parent1: Individual,
        parent2: Individual,
        rate: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Individual {
        if !rng.chance(rate) {
            return parent1;
        }
        self.recombine(parent1, parent2, rng)
    }

    /// Applies the policy unconditionally.
    pub fn recombine(
        &self,
        parent1: Individual,
        parent2: Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Individual {
        match self {
            Self::Single | Self::Uniform => {
                if rng.chance(0.5) {
                    parent1
                } else {
                    parent2
                }
            }
            Self::Arithmetic => {
                let alpha = rng.uniform();
                (alpha * parent1 + (1.0 - alpha) * parent2).clamp(0.0, 1.0)
            }
            Self::TwoPoint => {
                if rng.chance(TWO_POINT_FIRST_PARENT) {
                    parent1
                } else if rng.chance(0.5) {
                    (parent1 + parent2) / 2.0
                } else {
                    parent2
                }
            }
            Self::Fallback => (parent1 + parent2) / 2.0,
        }
    }
}

impl fmt::Display for CrossoverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! # Mutation
//!
//! Perturbation of a single offspring. Discrete policies work on the binary
//! encoding from [`crate::codec`]; continuous policies add noise directly and clamp
//! the result to `[0, 1]`.

use std::fmt;

use crate::codec::DiscreteGenome;
use crate::population::Individual;
use crate::rng::RandomNumberGenerator;

const GAUSSIAN_SIGMA: f64 = 0.1;
const BITFLIP_SPREAD: f64 = 0.1;
const FALLBACK_SPREAD: f64 = 0.05;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationMethod {
    /// Exchanges two distinct bits.
    Swap,
    /// Shuffles the bits between two distinct positions, inclusive.
    Scramble,
    /// Reverses the bits between two distinct positions, inclusive.
    Inversion,
    /// Adds zero-mean normal noise with standard deviation 0.1.
    Gaussian,
    /// Redraws the value uniformly.
    Random,
    /// Adds uniform noise in `[-0.1, 0.1)`. Despite the name, no bit is flipped.
    BitFlip,
    /// Adds uniform noise in `[-0.05, 0.05)`.
    Fallback,
}

impl MutationMethod {
    pub fn from_name(name: &str) -> Self {
        match name {
            "swap" => Self::Swap,
            "scramble" => Self::Scramble,
            "inversion" => Self::Inversion,
            "gaussian" => Self::Gaussian,
            "random" => Self::Random,
            "bitflip" => Self::BitFlip,
            _ => Self::Fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Swap => "swap",
            Self::Scramble => "scramble",
            Self::Inversion => "inversion",
            Self::Gaussian => "gaussian",
            Self::Random => "random",
            Self::BitFlip => "bitflip",
            Self::Fallback => "fallback",
        }
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Swap | Self::Scramble | Self::Inversion)
    }

    /// Mutates with probability `rate`; otherwise `individual` passes through.
    ///
    /// `genome_bits` is the codec width used by the discrete policies.
    pub fn mutate(
        &self,
        individual: Individual,
        rate: f64,
        genome_bits: u32,
        rng: &mut RandomNumberGenerator,
    ) -> Individual {
        if !rng.chance(rate) {
            return individual;
        }
        self.perturb(individual, genome_bits, rng)
    }

    /// Applies the policy unconditionally.
    pub fn perturb(
        &self,
        individual: Individual,
        genome_bits: u32,
        rng: &mut RandomNumberGenerator,
    ) -> Individual {
        if self.is_discrete() {
            return self.rearrange(individual, genome_bits, rng);
        }

        let perturbed = match self {
            Self::Gaussian => individual + rng.normal(0.0, GAUSSIAN_SIGMA),
            Self::Random => rng.uniform(),
            Self::BitFlip => individual + (rng.uniform() - 0.5) * 2.0 * BITFLIP_SPREAD,
            _ => individual + (rng.uniform() - 0.5) * 2.0 * FALLBACK_SPREAD,
        };
        perturbed.clamp(0.0, 1.0)
    }

    fn rearrange(
        &self,
        individual: Individual,
        genome_bits: u32,
        rng: &mut RandomNumberGenerator,
    ) -> Individual {
        let mut genome = DiscreteGenome::encode(individual, genome_bits);
        if genome.len() < 2 {
            return genome.decode();
        }

        let mut positions = rng.distinct_indices(genome.len(), 2);
        positions.sort_unstable();
        let (i, j) = (positions[0], positions[1]);

        match self {
            Self::Swap => genome.swap(i, j),
            Self::Scramble => genome.shuffle_segment(i, j, rng),
            _ => genome.reverse_segment(i, j),
        }
        genome.decode()
    }
}

impl fmt::Display for MutationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

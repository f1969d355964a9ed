//! # Genome Codec
//!
//! Converts an individual in `[0, 1]` to and from a fixed-width binary genome.
//! A value is quantized to the nearest of the `2^bits - 1` steps between 0 and 1
//! and written most significant bit first. Decoding divides the encoded integer by
//! `2^bits - 1`, so values already on the grid, including 0 and 1, survive a round
//! trip exactly.
//!
//! Discrete mutations are the only users of this module: they encode, rearrange
//! bits, and decode straight away.
//!
//! ## Example
//!
//! ```rust
//! use sinega::codec::DiscreteGenome;
//!
//! let genome = DiscreteGenome::encode(1.0, 8);
//! assert_eq!(genome.to_string(), "11111111");
//! assert_eq!(genome.decode(), 1.0);
//!
//! let genome = DiscreteGenome::encode(0.3, 8);
//! assert!((genome.decode() - 0.3).abs() <= 1.0 / 255.0);
//! ```

use std::fmt;

use crate::rng::RandomNumberGenerator;

/// Width used by the discrete mutations unless configured otherwise.
pub const DEFAULT_GENOME_BITS: u32 = 8;

/// A fixed-width binary rendering of an individual, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscreteGenome {
    bits: Vec<bool>,
}

impl DiscreteGenome {
    /// Encodes `x` on a grid of `2^bits - 1` steps.
    ///
    /// `x` is clamped to `[0, 1]` first. Widths above 32 are capped at 32.
    pub fn encode(x: f64, bits: u32) -> Self {
        let bits = bits.min(32);
        let max = max_level(bits);
        let level = (x.clamp(0.0, 1.0) * max as f64).round() as u64;

        Self {
            bits: (0..bits).rev().map(|shift| (level >> shift) & 1 == 1).collect(),
        }
    }

    /// Maps the genome back to `[0, 1]`. An empty genome decodes to 0.
    pub fn decode(&self) -> f64 {
        let max = max_level(self.bits.len() as u32);
        if max == 0 {
            return 0.0;
        }

        let level = self
            .bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
        level as f64 / max as f64
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Exchanges the bits at positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.bits.swap(i, j);
    }

    /// Reverses the inclusive segment `[start, end]`.
    pub fn reverse_segment(&mut self, start: usize, end: usize) {
        self.bits[start..=end].reverse();
    }

    /// Randomly permutes the inclusive segment `[start, end]`.
    pub fn shuffle_segment(&mut self, start: usize, end: usize, rng: &mut RandomNumberGenerator) {
        rng.shuffle(&mut self.bits[start..=end]);
    }
}

impl fmt::Display for DiscreteGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

fn max_level(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

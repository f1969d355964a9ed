use std::fmt;

use crate::population::{Individual, Population};
use crate::rng::RandomNumberGenerator;
use crate::selection::{
    RandomSelection, RankBasedSelection, RouletteWheelSelection, SelectionStrategy,
    TournamentSelection,
};

/// Tournament size used when the configured policy name is not recognized.
pub const FALLBACK_TOURNAMENT_SIZE: usize = 3;

/// The selection policy of a run, resolved once from its name.
///
/// Unrecognized names resolve to [`SelectionMethod::Fallback`], a tournament of
/// [`FALLBACK_TOURNAMENT_SIZE`] regardless of the configured tournament size.
///
/// ```
/// use sinega::selection::SelectionMethod;
///
/// assert_eq!(SelectionMethod::from_name("rank", 5), SelectionMethod::Rank);
/// assert_eq!(
///     SelectionMethod::from_name("tournament", 5),
///     SelectionMethod::Tournament { size: 5 }
/// );
/// assert_eq!(SelectionMethod::from_name("boltzmann", 5), SelectionMethod::Fallback);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMethod {
    Roulette,
    Tournament { size: usize },
    Rank,
    Random,
    Fallback,
}

impl SelectionMethod {
    /// Resolves a policy name. `tournament_size` is only used by `"tournament"`.
    pub fn from_name(name: &str, tournament_size: usize) -> Self {
        match name {
            "roulette" => Self::Roulette,
            "tournament" => Self::Tournament {
                size: tournament_size,
            },
            "rank" => Self::Rank,
            "random" => Self::Random,
            _ => Self::Fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Roulette => "roulette",
            Self::Tournament { .. } => "tournament",
            Self::Rank => "rank",
            Self::Random => "random",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl SelectionStrategy for SelectionMethod {
    fn select(&self, population: &Population, rng: &mut RandomNumberGenerator) -> Individual {
        match *self {
            Self::Roulette => RouletteWheelSelection.select(population, rng),
            Self::Tournament { size } => TournamentSelection {
                tournament_size: size,
            }
            .select(population, rng),
            Self::Rank => RankBasedSelection.select(population, rng),
            Self::Random => RandomSelection.select(population, rng),
            Self::Fallback => TournamentSelection {
                tournament_size: FALLBACK_TOURNAMENT_SIZE,
            }
            .select(population, rng),
        }
    }
}

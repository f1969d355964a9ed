pub mod method;
pub mod random;
pub mod rank;
pub mod roulette;
pub mod selection_strategy;
pub mod tournament;

pub use method::SelectionMethod;
pub use random::RandomSelection;
pub use rank::RankBasedSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;

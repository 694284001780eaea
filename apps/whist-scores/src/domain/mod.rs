//! Domain layer: pure scoring rules and game progression.

pub mod bidding;
pub mod bonus;
pub mod game_transition;
pub mod loser;
pub mod position;
pub mod records;
pub mod round_engine;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod standings;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_bonus;
#[cfg(test)]
mod tests_loser;
#[cfg(test)]
mod tests_position;
#[cfg(test)]
mod tests_snapshot;
#[cfg(test)]
mod tests_standings;

// Re-exports for ergonomics
pub use game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
pub use position::Position;
pub use records::{HistoricalGameRecord, Loser, PlayerResult};
pub use round_engine::{RoundAdvance, RoundOutcome};
pub use rules::cards_for_round;
pub use scoring::RoundScoring;
pub use snapshot::SessionSnapshot;
pub use state::{GameState, Phase, PlayerId, Roster, Seat};

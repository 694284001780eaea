#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;

// Re-exports for public API
pub use adapters::{JsonScoreStore, JsonStateStore, MemoryScoreStore, MemoryStateStore};
pub use config::AppConfig;
pub use domain::{GameState, HistoricalGameRecord, Loser, Phase, PlayerResult, Roster};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use repos::{Clock, FixedClock, ScoreStore, StateStore, SystemClock};
pub use services::{GameSession, SessionDeps, SessionEvent};

// Prelude for test convenience
pub mod prelude {
    pub use super::adapters::{MemoryScoreStore, MemoryStateStore};
    pub use super::domain::round_engine::{RoundAdvance, RoundOutcome};
    pub use super::domain::{HistoricalGameRecord, Loser, Phase, PlayerResult, Position, Roster};
    pub use super::error::AppError;
    pub use super::repos::{FixedClock, ScoreStore, StateStore};
    pub use super::services::{GameSession, SessionDeps, SessionEvent};
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    whist_test_support::logging::init();
}

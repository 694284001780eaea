//! Historical game results exchanged with the score store.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::state::PlayerId;

/// One player's line in a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player: PlayerId,
    /// Final cumulative score.
    pub score: i32,
    /// Final rank (1 = best). Older records may lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u8>,
    /// Leading rounds where bet == tricks. Older records may lack it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_wins: Option<u32>,
}

/// A finished game; immutable once written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalGameRecord {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub results: Vec<PlayerResult>,
}

impl HistoricalGameRecord {
    pub fn result_for(&self, player: &str) -> Option<&PlayerResult> {
        self.results.iter().find(|r| r.player == player)
    }

    pub fn score_of(&self, player: &str) -> Option<i32> {
        self.result_for(player).map(|r| r.score)
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u8 {
        u8::from(self.date.month())
    }
}

/// Player on an ongoing losing streak across consecutive prior months.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loser {
    pub player: PlayerId,
    pub losing_months: u32,
}

impl Loser {
    pub fn new(player: impl Into<PlayerId>, losing_months: u32) -> Self {
        Self {
            player: player.into(),
            losing_months: losing_months.max(1),
        }
    }
}

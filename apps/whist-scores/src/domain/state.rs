use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::records::Loser;
use crate::domain::rules::MIN_PLAYERS;
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = String;
pub type Seat = usize; // index into the roster

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Every player declares a bet for the round.
    BetInput,
    /// Tricks taken are entered and the round is scored.
    ScoreInput,
    /// All rounds complete.
    GameOver,
}

/// Ordered, fixed roster. Seat order is play order; the seat after the
/// dealer is "left of the dealer".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlayerId>", into = "Vec<PlayerId>")]
pub struct Roster {
    players: Vec<PlayerId>,
}

impl Roster {
    pub fn new<I, S>(players: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerId>,
    {
        let players: Vec<PlayerId> = players.into_iter().map(Into::into).collect();
        if players.len() < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidRoster,
                format!(
                    "roster needs at least {MIN_PLAYERS} players, got {}",
                    players.len()
                ),
            ));
        }
        let mut seen = HashSet::new();
        for p in &players {
            if p.trim().is_empty() {
                return Err(DomainError::validation(
                    ValidationKind::InvalidRoster,
                    "player names must not be blank",
                ));
            }
            if !seen.insert(p.as_str()) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidRoster,
                    format!("duplicate player '{p}'"),
                ));
            }
        }
        Ok(Self { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &str {
        &self.players[seat]
    }

    pub fn seat_of(&self, player: &str) -> Option<Seat> {
        self.players.iter().position(|p| p == player)
    }

    pub fn require_seat(&self, player: &str) -> Result<Seat, DomainError> {
        self.seat_of(player).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownPlayer,
                format!("'{player}' is not in the roster"),
            )
        })
    }

    /// Seat of the last roster player, whose tricks are always derived.
    pub fn last_seat(&self) -> Seat {
        self.players.len() - 1
    }

    pub fn seats(&self) -> std::ops::Range<Seat> {
        0..self.players.len()
    }

    /// Seat rotation. Positive deltas move towards the dealer's left.
    #[inline]
    pub fn seat_offset(&self, seat: Seat, delta: isize) -> Seat {
        let n = self.players.len() as isize;
        (seat as isize + delta).rem_euclid(n) as Seat
    }

    #[inline]
    pub fn next_seat(&self, seat: Seat) -> Seat {
        self.seat_offset(seat, 1)
    }

    #[inline]
    pub fn prev_seat(&self, seat: Seat) -> Seat {
        self.seat_offset(seat, -1)
    }

    /// Clockwise distance from `from` to `to` (0 when equal).
    #[inline]
    pub fn distance(&self, from: Seat, to: Seat) -> usize {
        let n = self.players.len();
        (to + n - from) % n
    }
}

impl TryFrom<Vec<PlayerId>> for Roster {
    type Error = DomainError;

    fn try_from(players: Vec<PlayerId>) -> Result<Self, Self::Error> {
        Roster::new(players)
    }
}

impl From<Roster> for Vec<PlayerId> {
    fn from(roster: Roster) -> Self {
        roster.players
    }
}

/// Per-player round histories, indexed by round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerLedger {
    pub bets: Vec<u8>,
    pub tricks: Vec<u8>,
    /// Cumulative, not per-round deltas.
    pub scores: Vec<i32>,
}

impl PlayerLedger {
    pub fn current_score(&self) -> i32 {
        self.scores.last().copied().unwrap_or(0)
    }

    pub fn total_bets(&self) -> u32 {
        self.bets.iter().map(|&b| b as u32).sum()
    }
}

/// Entire live game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub roster: Roster,
    pub phase: Phase,
    /// `None` before the first round; `Some(12)` once the game is over.
    pub round: Option<u8>,
    pub dealer: Seat,
    /// One ledger per seat.
    pub ledgers: Vec<PlayerLedger>,
    /// Bonus card level per seat for the current round.
    pub bonus_cards: Vec<u8>,
    /// Per seat: every bet so far matched the tricks taken.
    pub perfect_streak: Vec<bool>,
    /// Per seat: best exact-bet streak of the previous month.
    pub is_master: Vec<bool>,
    pub loser: Option<Loser>,
    /// Most recent holder of the last position.
    pub last_player: Option<Seat>,
}

impl GameState {
    /// Fresh state with empty histories; no round has started yet.
    pub fn new(roster: Roster, dealer: Seat) -> Self {
        let n = roster.len();
        Self {
            roster,
            phase: Phase::BetInput,
            round: None,
            dealer: dealer % n,
            ledgers: vec![PlayerLedger::default(); n],
            bonus_cards: vec![0; n],
            perfect_streak: vec![true; n],
            is_master: vec![false; n],
            loser: None,
            last_player: None,
        }
    }

    pub fn current_score(&self, seat: Seat) -> i32 {
        self.ledgers[seat].current_score()
    }

    pub fn current_scores(&self) -> Vec<i32> {
        self.ledgers.iter().map(PlayerLedger::current_score).collect()
    }

    /// Number of rounds whose scores have been recorded.
    pub fn completed_rounds(&self) -> usize {
        self.ledgers.first().map(|l| l.scores.len()).unwrap_or(0)
    }

    /// Sum of this round's bets, once every player has one.
    pub fn total_round_bets(&self) -> Option<u32> {
        let round = self.round? as usize;
        self.ledgers
            .iter()
            .map(|l| l.bets.get(round).map(|&b| b as u32))
            .sum()
    }

    pub fn bets_completed(&self) -> bool {
        self.total_round_bets().is_some()
    }

    /// Seat of the tracked loser, if they are part of this roster.
    pub fn loser_seat(&self) -> Option<Seat> {
        self.loser
            .as_ref()
            .and_then(|l| self.roster.seat_of(&l.player))
    }
}

pub fn require_round(state: &GameState, ctx: &'static str) -> Result<u8, DomainError> {
    state.round.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: round must be set ({ctx})"))
    })
}

pub fn require_phase(
    state: &GameState,
    expected: Phase,
    ctx: &'static str,
) -> Result<(), DomainError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("{ctx} requires {expected:?}, game is in {:?}", state.phase),
        ))
    }
}

//! Standings resolution with deterministic tie-breaks.

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, Seat};

/// A player's rank for the current standings.
///
/// Rosters larger than three still resolve into these three buckets: the
/// top score, the bottom score, and everyone in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    First,
    Middle,
    Last,
}

impl Position {
    /// Numeric rank, 1 = best.
    pub const fn rank(self) -> u8 {
        match self {
            Position::First => 1,
            Position::Middle => 2,
            Position::Last => 3,
        }
    }
}

/// Resolve `seat`'s position from cumulative scores.
///
/// Ties for first all share [`Position::First`]. A two-way tie for the bottom
/// is broken by walking back through the score history; if the histories
/// never differ, seating relative to the dealer decides. Three or more
/// players tied at the bottom are all [`Position::Last`].
pub fn determine_position(state: &GameState, seat: Seat) -> Position {
    let scores = state.current_scores();
    let score = scores[seat];
    let max = scores.iter().copied().max().unwrap_or(score);
    let min = scores.iter().copied().min().unwrap_or(score);

    if score == max {
        return Position::First;
    }
    if score != min {
        return Position::Middle;
    }

    let mut others = scores
        .iter()
        .enumerate()
        .filter(|&(other, &s)| other != seat && s == min)
        .map(|(other, _)| other);
    let rival = match (others.next(), others.next()) {
        (None, _) => return Position::Last,
        (Some(rival), None) => rival,
        (Some(_), Some(_)) => return Position::Last,
    };

    match history_tie_break(state, seat, rival) {
        Some(true) => Position::Last,
        Some(false) => Position::Middle,
        None => {
            if seated_below(state, seat, rival) {
                Position::Last
            } else {
                Position::Middle
            }
        }
    }
}

/// Positions for every seat, in seat order.
pub fn positions(state: &GameState) -> Vec<Position> {
    state
        .roster
        .seats()
        .map(|seat| determine_position(state, seat))
        .collect()
}

/// Most recent round where the two cumulative scores differ:
/// `Some(true)` when `seat` was lower there.
fn history_tie_break(state: &GameState, seat: Seat, rival: Seat) -> Option<bool> {
    let mine = &state.ledgers[seat].scores;
    let theirs = &state.ledgers[rival].scores;
    let rounds = mine.len().min(theirs.len());
    (0..rounds)
        .rev()
        .find(|&r| mine[r] != theirs[r])
        .map(|r| mine[r] < theirs[r])
}

/// Fully tied history: the dealer ranks below anyone, then the player
/// immediately left of the dealer, and so on around the table.
fn seated_below(state: &GameState, seat: Seat, rival: Seat) -> bool {
    let roster = &state.roster;
    roster.distance(state.dealer, seat) < roster.distance(state.dealer, rival)
}

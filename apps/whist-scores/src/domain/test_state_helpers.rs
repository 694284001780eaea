//! Test-only game state builders for domain unit tests.

use std::collections::HashMap;

use crate::domain::rules::cards_for_round;
use crate::domain::state::{GameState, Phase, PlayerId, Roster, Seat};

pub fn roster3() -> Roster {
    Roster::new(["gg", "dd", "toto"]).unwrap()
}

/// Build a state positioned at the start of `round` (BetInput) with the given
/// cumulative score histories, one `Vec` per seat.
///
/// Bets and tricks are filled with zeros for every completed round so the
/// ledger lengths stay consistent.
pub fn state_with_scores(roster: Roster, dealer: Seat, histories: &[Vec<i32>]) -> GameState {
    assert_eq!(roster.len(), histories.len(), "one history per seat");
    let completed = histories[0].len();
    let mut state = GameState::new(roster, dealer);
    for (ledger, scores) in state.ledgers.iter_mut().zip(histories) {
        assert_eq!(scores.len(), completed, "histories must be the same length");
        ledger.scores = scores.clone();
        ledger.bets = vec![0; completed];
        ledger.tricks = vec![0; completed];
    }
    state.round = Some(completed as u8);
    state.phase = Phase::BetInput;
    state
}

/// Bets map where every roster player declares `bet`.
pub fn uniform_bets(roster: &Roster, bet: u8) -> HashMap<PlayerId, Option<u8>> {
    roster
        .players()
        .iter()
        .map(|p| (p.clone(), Some(bet)))
        .collect()
}

/// Tricks map that hands every card of `round` to seat 0.
pub fn first_seat_takes_all(roster: &Roster, round: u8) -> HashMap<PlayerId, u8> {
    roster
        .seats()
        .map(|seat| {
            let taken = if seat == 0 { cards_for_round(round) } else { 0 };
            (roster.player(seat).to_string(), taken)
        })
        .collect()
}

pub fn tricks_map(entries: &[(&str, u8)]) -> HashMap<PlayerId, u8> {
    entries.iter().map(|(p, t)| (p.to_string(), *t)).collect()
}

pub fn bets_map(entries: &[(&str, Option<u8>)]) -> HashMap<PlayerId, Option<u8>> {
    entries.iter().map(|(p, b)| (p.to_string(), *b)).collect()
}

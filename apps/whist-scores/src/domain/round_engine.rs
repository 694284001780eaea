//! Round-to-round state machine.
//!
//! `BetInput -> ScoreInput -> (BetInput | GameOver)`, with `go_back` as the
//! only way to step backwards. Every operation validates its input before
//! touching the state.

use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, info};

use crate::domain::bidding::resolve_bets;
use crate::domain::bonus::assign_bonus_cards;
use crate::domain::records::Loser;
use crate::domain::rules::{cards_for_round, FIRST_BONUS_ROUND, ROUNDS};
use crate::domain::scoring::{apply_round_scoring, RoundScoring};
use crate::domain::state::{
    require_phase, require_round, GameState, Phase, PlayerId, Roster, Seat,
};
use crate::domain::tricks::normalize_tricks;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAdvance {
    /// A new round opened for bets.
    Started { round: u8 },
    /// The final round was scored.
    GameOver,
}

/// What `submit_tricks` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub scoring: RoundScoring,
    pub advance: RoundAdvance,
}

/// Start a game: empty histories, dealer rotated once, then round 0 opened
/// (which rotates the dealer again).
pub fn new_game(roster: Roster, initial_dealer: Seat, loser: Option<Loser>) -> GameState {
    let mut state = GameState::new(roster, initial_dealer);
    state.loser = loser;
    state.dealer = state.roster.next_seat(state.dealer);
    advance_round(&mut state);
    info!(
        players = state.roster.len(),
        dealer = state.roster.player(state.dealer),
        "New game started"
    );
    state
}

/// Move to the next round, rotating the dealer and refreshing bonus cards.
pub fn advance_round(state: &mut GameState) -> RoundAdvance {
    let next = state.round.map_or(0, |r| r.saturating_add(1));
    state.round = Some(next);
    state.dealer = state.roster.next_seat(state.dealer);
    assign_bonus_cards(state);

    if next >= ROUNDS {
        state.phase = Phase::GameOver;
        info!(round = next, "Game over");
        RoundAdvance::GameOver
    } else {
        state.phase = Phase::BetInput;
        debug!(
            round = next,
            dealer = state.roster.player(state.dealer),
            cards = cards_for_round(next),
            "Transition: -> BetInput"
        );
        RoundAdvance::Started { round: next }
    }
}

/// Record this round's bets. Absent bets are drawn uniformly from the legal
/// range.
pub fn submit_bets<R: Rng + ?Sized>(
    state: &mut GameState,
    bets: &HashMap<PlayerId, Option<u8>>,
    rng: &mut R,
) -> Result<(), DomainError> {
    require_phase(state, Phase::BetInput, "submit_bets")?;
    let round = require_round(state, "submit_bets")?;
    let resolved = resolve_bets(&state.roster, round, bets, rng)?;

    for (ledger, bet) in state.ledgers.iter_mut().zip(&resolved) {
        ledger.bets.push(*bet);
    }
    state.phase = Phase::ScoreInput;
    debug!(round, bets = ?resolved, "Transition: -> ScoreInput");
    Ok(())
}

/// Record this round's tricks, score the round and advance.
pub fn submit_tricks(
    state: &mut GameState,
    tricks: &HashMap<PlayerId, u8>,
) -> Result<RoundOutcome, DomainError> {
    require_phase(state, Phase::ScoreInput, "submit_tricks")?;
    let round = require_round(state, "submit_tricks")?;
    let normalized = normalize_tricks(&state.roster, tricks, cards_for_round(round))?;

    for (ledger, t) in state.ledgers.iter_mut().zip(&normalized) {
        ledger.tricks.push(*t);
    }
    let scoring = match apply_round_scoring(state) {
        Ok(scoring) => scoring,
        Err(e) => {
            for ledger in state.ledgers.iter_mut() {
                ledger.tricks.pop();
            }
            return Err(e);
        }
    };

    let idx = round as usize;
    for (streak, ledger) in state.perfect_streak.iter_mut().zip(&state.ledgers) {
        *streak &= ledger.bets[idx] == ledger.tricks[idx];
    }

    let advance = advance_round(state);
    Ok(RoundOutcome { scoring, advance })
}

/// Undo the last data-entry step. Returns whether anything changed.
///
/// From `ScoreInput` the round's bets are discarded. From `BetInput` after
/// round 0 the previous round's tricks and scores are discarded and that
/// round reopens for trick entry. Never leaves `GameOver`.
pub fn go_back(state: &mut GameState) -> bool {
    match (state.phase, state.round) {
        (Phase::ScoreInput, Some(round)) => {
            let idx = round as usize;
            for ledger in state.ledgers.iter_mut() {
                ledger.bets.truncate(idx);
            }
            state.phase = Phase::BetInput;
            debug!(round, "Went back: bets discarded");
            true
        }
        (Phase::BetInput, Some(round)) if round > 0 && round < ROUNDS => {
            let prev = round - 1;
            let idx = prev as usize;
            for ledger in state.ledgers.iter_mut() {
                ledger.tricks.truncate(idx);
                ledger.scores.truncate(idx);
            }
            state.round = Some(prev);
            state.dealer = state.roster.prev_seat(state.dealer);
            state.phase = Phase::ScoreInput;
            recompute_perfect_streaks(state);
            if prev < FIRST_BONUS_ROUND {
                // nobody was ranked last yet at this point of the game
                state.last_player = None;
            }
            assign_bonus_cards(state);
            debug!(round = prev, "Went back: previous round reopened");
            true
        }
        _ => false,
    }
}

fn recompute_perfect_streaks(state: &mut GameState) {
    for (streak, ledger) in state.perfect_streak.iter_mut().zip(&state.ledgers) {
        *streak = ledger
            .bets
            .iter()
            .zip(&ledger.tricks)
            .all(|(b, t)| b == t);
    }
}

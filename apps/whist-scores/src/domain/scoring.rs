use tracing::debug;

use crate::domain::rules::{cards_for_round, FINAL_BET_BONUS, FINAL_ROUND};
use crate::domain::state::{require_round, GameState, Seat};
use crate::errors::domain::DomainError;

/// Result of scoring one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundScoring {
    /// Per-seat change, final-round bonus included.
    pub round_score_deltas: Vec<i32>,
    /// Seat that received the final-round bet bonus.
    pub bet_bonus: Option<Seat>,
}

/// Score change for one player in one round.
///
/// An exact bet scores `tricks*5 + 10`, or `tricks*10 + 10` when the player
/// took every card of the round. A miss costs 5 per trick of difference.
pub fn round_delta(bet: u8, tricks: u8, cards: u8) -> i32 {
    let tricks_i = tricks as i32;
    if tricks == bet {
        if tricks == cards {
            tricks_i * 10 + 10
        } else {
            tricks_i * 5 + 10
        }
    } else {
        -5 * (tricks_i - bet as i32).abs()
    }
}

/// Append this round's cumulative score for every seat.
///
/// Expects bets and tricks for the current round to be recorded and the
/// round's scores not yet written.
pub fn apply_round_scoring(state: &mut GameState) -> Result<RoundScoring, DomainError> {
    let round = require_round(state, "apply_round_scoring")?;
    let idx = round as usize;
    let cards = cards_for_round(round);

    for (seat, ledger) in state.ledgers.iter().enumerate() {
        if ledger.bets.len() != idx + 1
            || ledger.tricks.len() != idx + 1
            || ledger.scores.len() != idx
        {
            return Err(DomainError::validation_other(format!(
                "Invariant violated: seat {seat} histories out of step for round {round}"
            )));
        }
    }

    let mut deltas = Vec::with_capacity(state.ledgers.len());
    for ledger in state.ledgers.iter_mut() {
        let delta = round_delta(ledger.bets[idx], ledger.tricks[idx], cards);
        let total = ledger.current_score() + delta;
        ledger.scores.push(total);
        deltas.push(delta);
    }

    let bet_bonus = if round == FINAL_ROUND {
        apply_final_bet_bonus(state)
    } else {
        None
    };
    if let Some(seat) = bet_bonus {
        deltas[seat] += FINAL_BET_BONUS;
    }

    debug!(round, ?deltas, "Round scored");
    Ok(RoundScoring {
        round_score_deltas: deltas,
        bet_bonus,
    })
}

/// Unique strict maximum of total bets, if any.
pub fn highest_bettor(state: &GameState) -> Option<Seat> {
    let totals: Vec<u32> = state.ledgers.iter().map(|l| l.total_bets()).collect();
    let max = *totals.iter().max()?;
    let mut leaders = totals.iter().enumerate().filter(|(_, &t)| t == max);
    let (seat, _) = leaders.next()?;
    if leaders.next().is_some() {
        return None;
    }
    Some(seat)
}

/// Add the final-round bet bonus onto the last cumulative score.
fn apply_final_bet_bonus(state: &mut GameState) -> Option<Seat> {
    let seat = highest_bettor(state)?;
    if let Some(last) = state.ledgers[seat].scores.last_mut() {
        *last += FINAL_BET_BONUS;
    }
    Some(seat)
}

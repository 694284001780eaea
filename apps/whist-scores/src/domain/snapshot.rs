//! Serializable snapshot of a live game, for crash recovery.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::records::Loser;
use crate::domain::rules::ROUNDS;
use crate::domain::state::{GameState, Phase, PlayerId, PlayerLedger, Roster};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Everything needed to resume a game, keyed by player name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub roster: Roster,
    pub dealer: PlayerId,
    pub loser: Option<Loser>,
    pub current_round: Option<u8>,
    pub phase: Phase,
    pub bonus_cards: BTreeMap<PlayerId, u8>,
    pub scores: BTreeMap<PlayerId, Vec<i32>>,
    pub bets: BTreeMap<PlayerId, Vec<u8>>,
    pub tricks: BTreeMap<PlayerId, Vec<u8>>,
    pub last_player: Option<PlayerId>,
    pub perfect_streak: BTreeMap<PlayerId, bool>,
    pub is_master: BTreeMap<PlayerId, bool>,
}

/// Produce a snapshot of the current game state. Never fails.
pub fn snapshot(state: &GameState) -> SessionSnapshot {
    let roster = &state.roster;
    let mut snap = SessionSnapshot {
        roster: roster.clone(),
        dealer: roster.player(state.dealer).to_string(),
        loser: state.loser.clone(),
        current_round: state.round,
        phase: state.phase,
        bonus_cards: BTreeMap::new(),
        scores: BTreeMap::new(),
        bets: BTreeMap::new(),
        tricks: BTreeMap::new(),
        last_player: state.last_player.map(|s| roster.player(s).to_string()),
        perfect_streak: BTreeMap::new(),
        is_master: BTreeMap::new(),
    };
    for seat in roster.seats() {
        let name = roster.player(seat).to_string();
        let ledger = &state.ledgers[seat];
        snap.bonus_cards.insert(name.clone(), state.bonus_cards[seat]);
        snap.scores.insert(name.clone(), ledger.scores.clone());
        snap.bets.insert(name.clone(), ledger.bets.clone());
        snap.tricks.insert(name.clone(), ledger.tricks.clone());
        snap.perfect_streak
            .insert(name.clone(), state.perfect_streak[seat]);
        snap.is_master.insert(name, state.is_master[seat]);
    }
    snap
}

/// Rebuild a game state, rejecting snapshots whose histories are out of
/// step with their round and phase.
pub fn restore(snap: SessionSnapshot) -> Result<GameState, DomainError> {
    let roster = snap.roster;
    let dealer = roster
        .seat_of(&snap.dealer)
        .ok_or_else(|| corrupt(format!("dealer '{}' not in roster", snap.dealer)))?;

    let (completed, open_bets) = match (snap.current_round, snap.phase) {
        (None, Phase::BetInput) => (0usize, 0usize),
        (None, phase) => return Err(corrupt(format!("{phase:?} without a round"))),
        (Some(r), Phase::GameOver) if r >= ROUNDS => (ROUNDS as usize, 0),
        (Some(r), Phase::BetInput) if r < ROUNDS => (r as usize, 0),
        (Some(r), Phase::ScoreInput) if r < ROUNDS => (r as usize, 1),
        (Some(r), phase) => return Err(corrupt(format!("round {r} invalid for {phase:?}"))),
    };

    let mut state = GameState::new(roster.clone(), dealer);
    state.round = snap.current_round;
    state.phase = snap.phase;
    state.loser = snap.loser;
    state.last_player = match snap.last_player {
        Some(name) => Some(
            roster
                .seat_of(&name)
                .ok_or_else(|| corrupt(format!("last player '{name}' not in roster")))?,
        ),
        None => None,
    };

    for seat in roster.seats() {
        let name = roster.player(seat);
        let ledger = PlayerLedger {
            bets: snap.bets.get(name).cloned().unwrap_or_default(),
            tricks: snap.tricks.get(name).cloned().unwrap_or_default(),
            scores: snap.scores.get(name).cloned().unwrap_or_default(),
        };
        if ledger.bets.len() != completed + open_bets
            || ledger.tricks.len() != completed
            || ledger.scores.len() != completed
        {
            return Err(corrupt(format!(
                "histories for '{name}' do not match round {:?} / {:?}",
                snap.current_round, snap.phase
            )));
        }
        state.ledgers[seat] = ledger;
        state.bonus_cards[seat] = snap.bonus_cards.get(name).copied().unwrap_or(0);
        state.perfect_streak[seat] = snap.perfect_streak.get(name).copied().unwrap_or(true);
        state.is_master[seat] = snap.is_master.get(name).copied().unwrap_or(false);
    }
    Ok(state)
}

fn corrupt(detail: String) -> DomainError {
    DomainError::infra(InfraErrorKind::DataCorruption, detail)
}

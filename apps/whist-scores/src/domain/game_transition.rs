use crate::domain::state::{GameState, Phase, Seat};

/// The parts of a game whose changes are announced to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub round: Option<u8>,
    pub phase: Phase,
    pub dealer: Seat,
    pub bonus_cards: Vec<u8>,
}

impl GameLifecycleView {
    pub fn of(state: &GameState) -> Self {
        Self {
            round: state.round,
            phase: state.phase,
            dealer: state.dealer,
            bonus_cards: state.bonus_cards.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: a fresh game opened its first round.
    GameStarted,

    /// Edge-triggered: a later round opened for bets.
    RoundStarted { round: u8, dealer: Seat },

    /// Edge-triggered: the game went back to an earlier round.
    RoundReopened { round: u8 },

    /// Edge-triggered: phase changed within or across rounds.
    PhaseChanged { from: Phase, to: Phase },

    /// Edge-triggered: bonus card levels changed.
    BonusCardsChanged { cards: Vec<u8> },

    /// Edge-triggered: the final round was scored.
    GameEnded,
}

/// Derive transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Round movement
    match (before.round, after.round) {
        (b, Some(0)) if after.phase == Phase::BetInput && b != Some(0) => {
            transitions.push(GameTransition::GameStarted);
            transitions.push(GameTransition::RoundStarted {
                round: 0,
                dealer: after.dealer,
            });
        }
        (b, Some(a)) if b.map_or(true, |b| a > b) && after.phase == Phase::BetInput => {
            transitions.push(GameTransition::RoundStarted {
                round: a,
                dealer: after.dealer,
            });
        }
        (Some(b), Some(a)) if a < b => {
            transitions.push(GameTransition::RoundReopened { round: a });
        }
        _ => {}
    }

    // 2. Phase change
    if before.phase != after.phase {
        transitions.push(GameTransition::PhaseChanged {
            from: before.phase,
            to: after.phase,
        });
    }

    // 3. Bonus cards
    if before.bonus_cards != after.bonus_cards {
        transitions.push(GameTransition::BonusCardsChanged {
            cards: after.bonus_cards.clone(),
        });
    }

    // 4. Game end (!GameOver -> GameOver)
    if before.phase != Phase::GameOver && after.phase == Phase::GameOver {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}

//! Data-entry operations.

use std::collections::HashMap;

use tracing::info;

use super::{GameSession, SessionEvent};
use crate::domain::bonus::assign_bonus_cards;
use crate::domain::game_transition::GameLifecycleView;
use crate::domain::records::Loser;
use crate::domain::round_engine::{self, RoundAdvance, RoundOutcome};
use crate::domain::state::{Phase, PlayerId};
use crate::error::AppError;

impl GameSession {
    /// Record the round's bets; `None` entries get a random legal bet.
    pub async fn submit_bets(
        &mut self,
        bets: &HashMap<PlayerId, Option<u8>>,
    ) -> Result<(), AppError> {
        self.apply_pending_history();
        let before = GameLifecycleView::of(&self.state);

        round_engine::submit_bets(&mut self.state, bets, &mut self.rng)?;

        self.emit_transitions(&before);
        self.persist().await;
        Ok(())
    }

    /// Record the round's tricks and score it. Finishing the last round
    /// starts the upload of the final result.
    pub async fn submit_tricks(
        &mut self,
        tricks: &HashMap<PlayerId, u8>,
    ) -> Result<RoundOutcome, AppError> {
        self.apply_pending_history();
        let before = GameLifecycleView::of(&self.state);
        let round = self.state.round;

        let outcome = round_engine::submit_tricks(&mut self.state, tricks)?;

        if let Some(round) = round {
            self.emit(SessionEvent::RoundScored {
                round,
                scoring: outcome.scoring.clone(),
            });
        }
        self.emit_transitions(&before);
        self.persist().await;

        if outcome.advance == RoundAdvance::GameOver {
            self.finalize_and_upload()?;
        }
        Ok(outcome)
    }

    /// Undo the last data-entry step. Returns whether anything changed.
    pub async fn go_back(&mut self) -> bool {
        let before = GameLifecycleView::of(&self.state);
        if !round_engine::go_back(&mut self.state) {
            return false;
        }
        self.emit_transitions(&before);
        self.persist().await;
        true
    }

    /// Pick the loser by hand, or clear it with `None`. Overrides whatever
    /// the history lookup found, for the rest of the session.
    pub async fn set_manual_loser(
        &mut self,
        player: Option<&str>,
        months: u32,
    ) -> Result<(), AppError> {
        let loser = match player {
            Some(name) => {
                self.state.roster.require_seat(name)?;
                Some(Loser::new(name, months))
            }
            None => None,
        };

        let before = GameLifecycleView::of(&self.state);
        self.manual_loser = true;
        self.state.loser = loser;
        if self.state.phase != Phase::GameOver {
            assign_bonus_cards(&mut self.state);
        }
        info!(loser = ?self.state.loser, "Manual loser set");

        self.emit_transitions(&before);
        self.persist().await;
        Ok(())
    }
}

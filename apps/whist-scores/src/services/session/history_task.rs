//! Background loser/masters lookup.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use super::{GameSession, SessionEvent};
use crate::domain::bonus::assign_bonus_cards;
use crate::domain::game_transition::GameLifecycleView;
use crate::domain::state::Phase;
use crate::services::history::HistoryInsights;

/// Latest lookup result, waiting to be applied to the game.
#[derive(Clone, Default)]
pub struct HistoryCell(Arc<Mutex<Option<HistoryInsights>>>);

impl HistoryCell {
    fn put(&self, insights: HistoryInsights) {
        *self.0.lock() = Some(insights);
    }

    fn take(&self) -> Option<HistoryInsights> {
        self.0.lock().take()
    }
}

impl GameSession {
    /// Spawn a loser/masters lookup. Returns `false` when one is already
    /// pending or there is no Tokio runtime to run it on.
    pub fn refresh_history(&mut self) -> bool {
        if self
            .history_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
        {
            debug!("History lookup already pending");
            return false;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("No async runtime; playing without loser and masters");
            return false;
        };

        let history = self.history.clone();
        let roster = self.state.roster.clone();
        let today = self.deps.clock.now().date();
        let cell = self.history_cell.clone();
        self.history_task = Some(runtime.spawn(async move {
            let insights = history.insights(&roster, today).await;
            cell.put(insights);
        }));
        true
    }

    /// Wait for the pending lookup, if any, and apply its result.
    pub async fn await_history(&mut self) {
        if let Some(task) = self.history_task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "History lookup task failed");
            }
        }
        if self.apply_pending_history() {
            self.persist().await;
        }
    }

    /// Fold a finished lookup into the game. Returns whether anything was
    /// applied.
    pub(super) fn apply_pending_history(&mut self) -> bool {
        let Some(insights) = self.history_cell.take() else {
            return false;
        };
        let before = GameLifecycleView::of(&self.state);

        if !self.manual_loser {
            self.state.loser = insights.loser.clone();
        }
        if insights.masters.len() == self.state.roster.len() {
            self.state.is_master = insights.masters.clone();
        }
        if self.state.phase != Phase::GameOver {
            assign_bonus_cards(&mut self.state);
        }

        info!(
            loser = ?self.state.loser,
            masters = ?self.state.is_master,
            "History applied"
        );
        self.emit(SessionEvent::HistoryApplied {
            loser: self.state.loser.clone(),
            masters: self.state.is_master.clone(),
        });
        self.emit_transitions(&before);
        true
    }
}

//! Game session service - owns the live game and its side effects.
//!
//! Rule operations run through `&mut self` and validate before mutating.
//! History lookups and the final upload run as spawned tasks; the game never
//! waits on them, and a failing store only degrades what they contribute.

mod entry;
mod finalize;
mod history_task;

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::position::{positions, Position};
use crate::domain::records::Loser;
use crate::domain::round_engine::new_game;
use crate::domain::scoring::RoundScoring;
use crate::domain::snapshot::{restore, snapshot};
use crate::domain::state::{GameState, Roster};
use crate::error::AppError;
use crate::repos::{Clock, ScoreStore, StateStore};
use crate::services::history::HistoryService;
use history_task::HistoryCell;

const EVENT_CAPACITY: usize = 256;

/// Stores and clock a session works against.
#[derive(Clone)]
pub struct SessionDeps {
    pub scores: Arc<dyn ScoreStore>,
    pub state: Arc<dyn StateStore>,
    pub clock: Arc<dyn Clock>,
}

/// Change notifications for observers of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Transition(GameTransition),
    RoundScored { round: u8, scoring: RoundScoring },
    HistoryApplied { loser: Option<Loser>, masters: Vec<bool> },
    Uploaded,
    UploadFailed { detail: String },
}

pub struct GameSession {
    state: GameState,
    deps: SessionDeps,
    history: HistoryService,
    rng: ChaCha8Rng,
    events: broadcast::Sender<SessionEvent>,
    history_cell: HistoryCell,
    history_task: Option<JoinHandle<()>>,
    upload_task: Option<JoinHandle<Result<(), AppError>>>,
    uploaded: bool,
    /// Set once the loser was chosen by hand; history lookups keep off it.
    manual_loser: bool,
}

impl GameSession {
    /// Start a fresh game and kick off the history lookup.
    ///
    /// `initial_dealer` is rotated twice before round 0 is dealt, once by the
    /// new game and once by opening the round.
    pub fn start(
        roster: Roster,
        initial_dealer: &str,
        deps: SessionDeps,
        seed: Option<u64>,
    ) -> Result<Self, AppError> {
        let dealer = roster.require_seat(initial_dealer)?;
        let state = new_game(roster, dealer, None);
        let mut session = Self::with_state(state, deps, seed);
        session.refresh_history();
        Ok(session)
    }

    /// Continue the game saved in the state store, or start a fresh one with
    /// `initial_dealer` when nothing was saved or the store cannot be reached.
    ///
    /// A snapshot that does not restore is reported as `DataCorruption`.
    pub async fn resume(
        roster: Roster,
        initial_dealer: &str,
        deps: SessionDeps,
        seed: Option<u64>,
    ) -> Result<Self, AppError> {
        let saved = match deps.state.load_snapshot().await {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "State store unavailable; starting a new game");
                None
            }
        };
        let Some(saved) = saved else {
            return Self::start(roster, initial_dealer, deps, seed);
        };

        let state = restore(saved)?;
        info!(
            round = ?state.round,
            phase = ?state.phase,
            players = state.roster.len(),
            "Resumed saved game"
        );
        Ok(Self::with_state(state, deps, seed))
    }

    fn with_state(state: GameState, deps: SessionDeps, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            history: HistoryService::new(Arc::clone(&deps.scores)),
            state,
            deps,
            rng,
            events,
            history_cell: HistoryCell::default(),
            history_task: None,
            upload_task: None,
            uploaded: false,
            manual_loser: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn positions(&self) -> Vec<Position> {
        positions(&self.state)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Start the next game with the same roster. The dealer keeps rotating
    /// from the previous game.
    pub async fn new_game(&mut self) {
        self.apply_pending_history();
        let before = GameLifecycleView::of(&self.state);

        let loser = self.state.loser.clone();
        let masters = self.state.is_master.clone();
        let mut state = new_game(self.state.roster.clone(), self.state.dealer, loser);
        state.is_master = masters;
        self.state = state;
        self.uploaded = false;
        self.upload_task = None;

        self.emit_transitions(&before);
        self.refresh_history();
        self.persist().await;
    }

    fn emit(&self, event: SessionEvent) {
        // No receivers is fine.
        let _ = self.events.send(event);
    }

    fn emit_transitions(&self, before: &GameLifecycleView) {
        let after = GameLifecycleView::of(&self.state);
        for transition in derive_game_transitions(before, &after) {
            self.emit(SessionEvent::Transition(transition));
        }
    }

    /// Save the snapshot; a failing store is logged and play continues.
    async fn persist(&self) {
        let snap = snapshot(&self.state);
        if let Err(e) = self.deps.state.save_snapshot(&snap).await {
            warn!(
                error = %e,
                code = %e.code(),
                round = ?self.state.round,
                "Snapshot not saved"
            );
        }
    }
}

//! Final result upload.

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, error, info};

use super::{GameSession, SessionEvent};
use crate::domain::loser::consecutive_wins;
use crate::domain::position::determine_position;
use crate::domain::records::{HistoricalGameRecord, PlayerResult};
use crate::domain::state::{require_phase, Phase};
use crate::error::AppError;

impl GameSession {
    /// The finished game as it will be stored.
    pub fn final_record(&self) -> Result<HistoricalGameRecord, AppError> {
        require_phase(&self.state, Phase::GameOver, "final_record")?;
        let roster = &self.state.roster;
        let results = roster
            .seats()
            .map(|seat| {
                let ledger = &self.state.ledgers[seat];
                PlayerResult {
                    player: roster.player(seat).to_string(),
                    score: ledger.current_score(),
                    position: Some(determine_position(&self.state, seat).rank()),
                    consecutive_wins: Some(consecutive_wins(&ledger.bets, &ledger.tricks)),
                }
            })
            .collect();
        Ok(HistoricalGameRecord {
            date: self.deps.clock.now(),
            results,
        })
    }

    /// Upload the finished game in the background. Returns `false` when it
    /// was already started for this game.
    pub fn finalize_and_upload(&mut self) -> Result<bool, AppError> {
        if self.uploaded {
            debug!("Final result already uploading");
            return Ok(false);
        }
        let record = self.final_record()?;
        let runtime = Handle::try_current()
            .map_err(|e| AppError::internal(format!("cannot upload without a runtime: {e}")))?;
        let scores = Arc::clone(&self.deps.scores);
        let events = self.events.clone();

        self.uploaded = true;
        self.upload_task = Some(runtime.spawn(async move {
            match scores.save(record).await {
                Ok(()) => {
                    info!("Final result uploaded");
                    let _ = events.send(SessionEvent::Uploaded);
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, code = %e.code(), "Final result upload failed");
                    let _ = events.send(SessionEvent::UploadFailed {
                        detail: e.to_string(),
                    });
                    Err(e)
                }
            }
        }));
        Ok(true)
    }

    /// Wait for the running upload. A failed upload may be retried with
    /// [`GameSession::finalize_and_upload`].
    pub async fn await_upload(&mut self) -> Option<Result<(), AppError>> {
        let task = self.upload_task.take()?;
        let result = match task.await {
            Ok(result) => result,
            Err(e) => Err(AppError::internal(format!("upload task failed: {e}"))),
        };
        if result.is_err() {
            self.uploaded = false;
        }
        Some(result)
    }
}

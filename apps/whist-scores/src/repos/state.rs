//! Snapshot store for the game in progress.

use async_trait::async_trait;

use crate::domain::snapshot::SessionSnapshot;
use crate::error::AppError;

/// Holds at most one snapshot: the latest state of the live game.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn save_snapshot(&self, snapshot: &SessionSnapshot) -> Result<(), AppError>;

    /// `Ok(None)` when nothing has been saved yet.
    async fn load_snapshot(&self) -> Result<Option<SessionSnapshot>, AppError>;
}

//! State store backed by a single JSON snapshot file.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::adapters::json_file::{read_json, write_json_atomic};
use crate::domain::snapshot::SessionSnapshot;
use crate::error::AppError;
use crate::repos::state::StateStore;

#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StateStore for JsonStateStore {
    async fn save_snapshot(&self, snapshot: &SessionSnapshot) -> Result<(), AppError> {
        write_json_atomic(&self.path, snapshot).await?;
        debug!(
            path = %self.path.display(),
            round = ?snapshot.current_round,
            phase = ?snapshot.phase,
            "Snapshot saved"
        );
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<Option<SessionSnapshot>, AppError> {
        read_json(&self.path).await
    }
}

//! Score store backed by a single JSON file holding an array of records.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::adapters::json_file::{read_json, write_json_atomic};
use crate::domain::records::HistoricalGameRecord;
use crate::error::AppError;
use crate::repos::scores::{select_scores, ScoreStore};

#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<HistoricalGameRecord>, AppError> {
        Ok(read_json(&self.path).await?.unwrap_or_default())
    }
}

#[async_trait]
impl ScoreStore for JsonScoreStore {
    async fn save(&self, record: HistoricalGameRecord) -> Result<(), AppError> {
        self.save_all(vec![record]).await
    }

    async fn load_scores(&self, year: Option<i32>) -> Result<Vec<HistoricalGameRecord>, AppError> {
        let records = self.read_all().await?;
        let selected = select_scores(&records, year);
        debug!(path = %self.path.display(), ?year, count = selected.len(), "Scores loaded");
        Ok(selected)
    }

    async fn save_all(&self, records: Vec<HistoricalGameRecord>) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut stored = self.read_all().await?;
        let added = records.len();
        stored.extend(records);
        write_json_atomic(&self.path, &stored).await?;
        info!(path = %self.path.display(), added, total = stored.len(), "Scores saved");
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        write_json_atomic(&self.path, &Vec::<HistoricalGameRecord>::new()).await?;
        info!(path = %self.path.display(), "Scores deleted");
        Ok(())
    }

    async fn replace_all(&self, records: Vec<HistoricalGameRecord>) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        write_json_atomic(&self.path, &records).await?;
        info!(path = %self.path.display(), total = records.len(), "Scores replaced");
        Ok(())
    }
}

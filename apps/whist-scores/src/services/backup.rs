//! Yearly backup files for the score store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::adapters::json_file::{read_json, write_json_atomic};
use crate::domain::records::HistoricalGameRecord;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::scores::ScoreStore;

pub fn backup_file_name(year: i32) -> String {
    format!("scores_{year}.json")
}

#[derive(Clone)]
pub struct BackupService {
    scores: Arc<dyn ScoreStore>,
}

impl BackupService {
    pub fn new(scores: Arc<dyn ScoreStore>) -> Self {
        Self { scores }
    }

    /// Write one `scores_<year>.json` per year, oldest game first.
    pub async fn export(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let records = self.scores.load_scores(None).await?;
        let mut by_year: BTreeMap<i32, Vec<HistoricalGameRecord>> = BTreeMap::new();
        for record in records {
            by_year.entry(record.year()).or_default().push(record);
        }

        let mut written = Vec::with_capacity(by_year.len());
        for (year, mut games) in by_year {
            games.sort_by(|a, b| a.date.cmp(&b.date));
            let path = dir.join(backup_file_name(year));
            write_json_atomic(&path, &games).await?;
            info!(year, games = games.len(), path = %path.display(), "Backup written");
            written.push(path);
        }
        Ok(written)
    }

    /// Replace the store contents with every `.json` file found in `dir`.
    ///
    /// Refuses an empty backup so a wrong directory cannot wipe the store.
    /// The swap is a single store write, so a failure keeps the old games.
    pub async fn restore(&self, dir: &Path) -> Result<usize, AppError> {
        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();

        let mut records: Vec<HistoricalGameRecord> = Vec::new();
        for path in &files {
            match read_json::<Vec<HistoricalGameRecord>>(path).await? {
                Some(batch) => records.extend(batch),
                None => warn!(path = %path.display(), "Backup file vanished while restoring"),
            }
        }

        if records.is_empty() {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                format!("no games found in backup directory {}", dir.display()),
            ));
        }

        let restored = records.len();
        self.scores.replace_all(records).await?;
        info!(files = files.len(), restored, "Backup restored");
        Ok(restored)
    }
}

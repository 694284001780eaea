//! Score store contract for finished games.

use async_trait::async_trait;

use crate::domain::records::HistoricalGameRecord;
use crate::error::AppError;

/// Persistent collection of finished games.
///
/// Implementations report an unreachable backend as
/// [`AppError::StoreUnavailable`]; callers decide whether that is fatal.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Append one finished game.
    async fn save(&self, record: HistoricalGameRecord) -> Result<(), AppError>;

    /// Records of `year` (all years when `None`), newest first.
    async fn load_scores(&self, year: Option<i32>) -> Result<Vec<HistoricalGameRecord>, AppError>;

    /// Append a batch of games.
    async fn save_all(&self, records: Vec<HistoricalGameRecord>) -> Result<(), AppError>;

    /// Remove every stored game.
    async fn delete_all(&self) -> Result<(), AppError>;

    /// Swap the whole collection for `records` in one write. On failure the
    /// previous contents stay in place.
    async fn replace_all(&self, records: Vec<HistoricalGameRecord>) -> Result<(), AppError>;
}

/// Keep `year`'s records (or all) and order them newest first.
pub fn select_scores(
    records: &[HistoricalGameRecord],
    year: Option<i32>,
) -> Vec<HistoricalGameRecord> {
    let mut selected: Vec<HistoricalGameRecord> = records
        .iter()
        .filter(|r| year.map_or(true, |y| r.year() == y))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}

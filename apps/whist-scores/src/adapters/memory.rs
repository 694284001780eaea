//! In-memory stores for tests and as fallbacks.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::records::HistoricalGameRecord;
use crate::domain::snapshot::SessionSnapshot;
use crate::error::AppError;
use crate::repos::scores::{select_scores, ScoreStore};
use crate::repos::state::StateStore;

/// Switch that makes a store answer every call with `StoreUnavailable`.
#[derive(Debug, Default)]
struct Availability(AtomicBool);

impl Availability {
    fn check(&self, store: &str) -> Result<(), AppError> {
        if self.0.load(Ordering::SeqCst) {
            Err(AppError::store_unavailable(format!("{store} is offline")))
        } else {
            Ok(())
        }
    }

    fn set_unavailable(&self, unavailable: bool) {
        self.0.store(unavailable, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    records: RwLock<Vec<HistoricalGameRecord>>,
    offline: Availability,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<HistoricalGameRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            offline: Availability::default(),
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.offline.set_unavailable(unavailable);
    }

    /// Stored records in insertion order.
    pub fn records(&self) -> Vec<HistoricalGameRecord> {
        self.records.read().clone()
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn save(&self, record: HistoricalGameRecord) -> Result<(), AppError> {
        self.offline.check("score store")?;
        self.records.write().push(record);
        Ok(())
    }

    async fn load_scores(&self, year: Option<i32>) -> Result<Vec<HistoricalGameRecord>, AppError> {
        self.offline.check("score store")?;
        Ok(select_scores(&self.records.read(), year))
    }

    async fn save_all(&self, records: Vec<HistoricalGameRecord>) -> Result<(), AppError> {
        self.offline.check("score store")?;
        self.records.write().extend(records);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        self.offline.check("score store")?;
        self.records.write().clear();
        Ok(())
    }

    async fn replace_all(&self, records: Vec<HistoricalGameRecord>) -> Result<(), AppError> {
        self.offline.check("score store")?;
        *self.records.write() = records;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStateStore {
    snapshot: RwLock<Option<SessionSnapshot>>,
    offline: Availability,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.offline.set_unavailable(unavailable);
    }

    pub fn current(&self) -> Option<SessionSnapshot> {
        self.snapshot.read().clone()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn save_snapshot(&self, snapshot: &SessionSnapshot) -> Result<(), AppError> {
        self.offline.check("state store")?;
        *self.snapshot.write() = Some(snapshot.clone());
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<Option<SessionSnapshot>, AppError> {
        self.offline.check("state store")?;
        Ok(self.snapshot.read().clone())
    }
}

//! Services layer: orchestration between the domain and the stores.

pub mod backup;
pub mod history;
pub mod session;

pub use backup::BackupService;
pub use history::{HistoryInsights, HistoryService, YearStandings};
pub use session::{GameSession, SessionDeps, SessionEvent};

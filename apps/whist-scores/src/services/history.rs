//! Historical analysis over the score store.

use std::sync::Arc;

use serde::Serialize;
use time::Date;
use tracing::{debug, warn};

use crate::domain::loser::{find_loser, previous_month, set_master};
use crate::domain::records::Loser;
use crate::domain::standings::{
    longest_streaks, monthly_summaries, LongestStreak, MonthlySummary,
};
use crate::domain::state::Roster;
use crate::error::AppError;
use crate::repos::scores::ScoreStore;

/// Loser and masters as seen from one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryInsights {
    pub loser: Option<Loser>,
    /// Per seat, roster order.
    pub masters: Vec<bool>,
}

/// Standings of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearStandings {
    pub year: i32,
    pub months: Vec<MonthlySummary>,
    pub longest_streak: LongestStreak,
}

#[derive(Clone)]
pub struct HistoryService {
    scores: Arc<dyn ScoreStore>,
}

impl HistoryService {
    pub fn new(scores: Arc<dyn ScoreStore>) -> Self {
        Self { scores }
    }

    pub async fn find_loser(&self, roster: &Roster, today: Date) -> Result<Option<Loser>, AppError> {
        let records = self.scores.load_scores(Some(today.year())).await?;
        let loser = find_loser(&records, roster, today);
        debug!(records = records.len(), loser = ?loser, "Loser computed");
        Ok(loser)
    }

    pub async fn masters(&self, roster: &Roster, today: Date) -> Result<Vec<bool>, AppError> {
        let (year, _) = previous_month(today);
        let records = self.scores.load_scores(Some(year)).await?;
        Ok(set_master(&records, roster, today))
    }

    /// Loser and masters, degrading to none / all-false when the store fails.
    pub async fn insights(&self, roster: &Roster, today: Date) -> HistoryInsights {
        let loser = self.find_loser(roster, today).await.unwrap_or_else(|e| {
            warn!(error = %e, code = %e.code(), "Loser lookup failed; continuing without one");
            None
        });
        let masters = self.masters(roster, today).await.unwrap_or_else(|e| {
            warn!(error = %e, code = %e.code(), "Masters lookup failed; nobody is master");
            vec![false; roster.len()]
        });
        HistoryInsights { loser, masters }
    }

    pub async fn standings(&self, roster: &Roster, year: i32) -> Result<YearStandings, AppError> {
        let records = self.scores.load_scores(Some(year)).await?;
        Ok(YearStandings {
            year,
            months: monthly_summaries(&records, roster, year),
            longest_streak: longest_streaks(&records, roster, year),
        })
    }
}

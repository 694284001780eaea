//! Environment-driven application configuration.

use std::env;
use std::path::PathBuf;

use crate::domain::records::Loser;
use crate::domain::state::Roster;
use crate::error::AppError;

pub const DEFAULT_SCORES_PATH: &str = "scores.json";
pub const DEFAULT_STATE_PATH: &str = "current_game.json";
pub const DEFAULT_ROSTER: &str = "gg,dd,toto";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub scores_path: PathBuf,
    pub state_path: PathBuf,
    pub roster: Roster,
    pub manual_loser: Option<Loser>,
}

impl AppConfig {
    /// Read `WHIST_SCORES_PATH`, `WHIST_STATE_PATH`, `WHIST_ROSTER` and
    /// `WHIST_MANUAL_LOSER`, falling back to defaults for unset values.
    pub fn from_env() -> Result<Self, AppError> {
        let scores_path = var_or("WHIST_SCORES_PATH", DEFAULT_SCORES_PATH).into();
        let state_path = var_or("WHIST_STATE_PATH", DEFAULT_STATE_PATH).into();
        let roster = parse_roster(&var_or("WHIST_ROSTER", DEFAULT_ROSTER))?;
        let manual_loser = match env::var("WHIST_MANUAL_LOSER") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_manual_loser(&raw, &roster)?),
            _ => None,
        };
        Ok(Self {
            scores_path,
            state_path,
            roster,
            manual_loser,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Comma-separated names, surrounding whitespace ignored.
pub fn parse_roster(raw: &str) -> Result<Roster, AppError> {
    Roster::new(raw.split(',').map(str::trim))
        .map_err(|e| AppError::config(format!("WHIST_ROSTER: {e}")))
}

/// `name:months`, or just `name` for a single month.
pub fn parse_manual_loser(raw: &str, roster: &Roster) -> Result<Loser, AppError> {
    let (name, months) = match raw.split_once(':') {
        Some((name, months)) => {
            let months = months.trim().parse::<u32>().map_err(|_| {
                AppError::config(format!(
                    "WHIST_MANUAL_LOSER: '{months}' is not a number of months"
                ))
            })?;
            (name.trim(), months)
        }
        None => (raw.trim(), 1),
    };
    if roster.seat_of(name).is_none() {
        return Err(AppError::config(format!(
            "WHIST_MANUAL_LOSER: '{name}' is not in the roster"
        )));
    }
    Ok(Loser::new(name, months))
}

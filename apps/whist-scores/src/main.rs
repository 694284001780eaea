//! whist-scores CLI - standings, loser and backups from the JSON score store.

mod telemetry;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::{error, info};
use whist_scores::adapters::JsonScoreStore;
use whist_scores::config::AppConfig;
use whist_scores::error::AppError;
use whist_scores::services::{BackupService, HistoryService};

#[derive(Parser)]
#[command(name = "whist-scores")]
#[command(about = "Standings, losers and backups for the whist score store")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Monthly points and longest streak of a year
    Standings {
        /// Defaults to the current year
        #[arg(long)]
        year: Option<i32>,
    },
    /// Player on a losing streak before this month
    Loser {
        /// Evaluate as of this day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        today: Option<Date>,
    },
    /// Masters of the previous month
    Masters {
        /// Evaluate as of this day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        today: Option<Date>,
    },
    /// Write one scores_<year>.json per year
    Export {
        #[arg(long)]
        dir: PathBuf,
    },
    /// Replace the store with the .json files of a backup directory
    Restore {
        #[arg(long)]
        dir: PathBuf,
    },
}

fn parse_day(raw: &str) -> Result<Date, String> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[derive(Serialize)]
struct MasterLine<'a> {
    player: &'a str,
    master: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();
    let args = Args::parse();

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), error = %e, "Command failed");
            eprintln!("{}: {}", e.code(), e.detail());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let store = Arc::new(JsonScoreStore::new(&config.scores_path));
    info!(path = %store.path().display(), "Using score store");
    let today = OffsetDateTime::now_utc().date();

    match command {
        Command::Standings { year } => {
            let history = HistoryService::new(store);
            let standings = history
                .standings(&config.roster, year.unwrap_or(today.year()))
                .await?;
            print_json(&standings)
        }
        Command::Loser { today: day } => {
            let loser = match config.manual_loser {
                Some(manual) => Some(manual),
                None => {
                    HistoryService::new(store)
                        .find_loser(&config.roster, day.unwrap_or(today))
                        .await?
                }
            };
            print_json(&loser)
        }
        Command::Masters { today: day } => {
            let masters = HistoryService::new(store)
                .masters(&config.roster, day.unwrap_or(today))
                .await?;
            let lines: Vec<MasterLine<'_>> = config
                .roster
                .players()
                .iter()
                .zip(masters)
                .map(|(player, master)| MasterLine { player, master })
                .collect();
            print_json(&lines)
        }
        Command::Export { dir } => {
            let written = BackupService::new(store).export(&dir).await?;
            for path in written {
                println!("{}", path.display());
            }
            Ok(())
        }
        Command::Restore { dir } => {
            let restored = BackupService::new(store).restore(&dir).await?;
            println!("restored {restored} games");
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

//! Year standings: per-game points, monthly summaries and longest streaks.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::loser::{LEADER_POINTS, RUNNER_UP_POINTS};
use crate::domain::records::HistoricalGameRecord;
use crate::domain::state::{PlayerId, Roster, Seat};

/// Points a finished game contributes to the standings.
///
/// With every position recorded, the best position gets 2 and the next one
/// 1. Otherwise scores decide: everyone tied for the top gets 2 and nobody
/// gets 1; a sole leader gets 2 and everyone tied for the runner-up score
/// gets 1.
pub fn game_points(record: &HistoricalGameRecord, roster: &Roster) -> Vec<u32> {
    let mut points = vec![0; roster.len()];
    let results: Vec<(Seat, i32, Option<u8>)> = roster
        .seats()
        .filter_map(|seat| {
            record
                .result_for(roster.player(seat))
                .map(|r| (seat, r.score, r.position))
        })
        .collect();
    if results.is_empty() {
        return points;
    }

    if results.len() == roster.len() && results.iter().all(|r| r.2.is_some()) {
        let mut by_position = results.clone();
        by_position.sort_by_key(|r| r.2);
        points[by_position[0].0] = LEADER_POINTS;
        if let Some(second) = by_position.get(1) {
            points[second.0] = RUNNER_UP_POINTS;
        }
        return points;
    }

    let top = results.iter().map(|r| r.1).max().unwrap_or(0);
    let leaders: Vec<Seat> = results.iter().filter(|r| r.1 == top).map(|r| r.0).collect();
    for &seat in &leaders {
        points[seat] = LEADER_POINTS;
    }
    if leaders.len() == 1 {
        if let Some(runner_up) = results.iter().map(|r| r.1).filter(|&s| s < top).max() {
            for r in results.iter().filter(|r| r.1 == runner_up) {
                points[r.0] = RUNNER_UP_POINTS;
            }
        }
    }
    points
}

/// Month tally: 2 for players equal to the best total, 1 for players equal
/// to the second value of the descending ordering.
pub fn month_tallies(points: &[u32]) -> Vec<u32> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    points
        .iter()
        .map(|&p| {
            if sorted.first() == Some(&p) {
                2
            } else if sorted.get(1) == Some(&p) {
                1
            } else {
                0
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// Calendar month, 1..=12.
    pub month: u8,
    pub games: usize,
    /// Summed game points per player, roster order.
    pub points: Vec<(PlayerId, u32)>,
    /// Month tally per player, roster order.
    pub tallies: Vec<(PlayerId, u32)>,
}

/// Summaries for every month of `year` that has games, in calendar order.
pub fn monthly_summaries(
    records: &[HistoricalGameRecord],
    roster: &Roster,
    year: i32,
) -> Vec<MonthlySummary> {
    let mut by_month: BTreeMap<u8, (usize, Vec<u32>)> = BTreeMap::new();
    for record in records.iter().filter(|r| r.year() == year) {
        let entry = by_month
            .entry(record.month())
            .or_insert_with(|| (0, vec![0; roster.len()]));
        entry.0 += 1;
        for (total, p) in entry.1.iter_mut().zip(game_points(record, roster)) {
            *total += p;
        }
    }

    by_month
        .into_iter()
        .map(|(month, (games, points))| {
            let tallies = month_tallies(&points);
            MonthlySummary {
                month,
                games,
                points: label(roster, &points),
                tallies: label(roster, &tallies),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestStreak {
    pub value: u32,
    pub players: Vec<PlayerId>,
}

/// Best recorded exact-bet streak of the year and who reached it.
/// No players are listed when the best is 0.
pub fn longest_streaks(
    records: &[HistoricalGameRecord],
    roster: &Roster,
    year: i32,
) -> LongestStreak {
    let mut best = vec![0u32; roster.len()];
    for record in records.iter().filter(|r| r.year() == year) {
        for seat in roster.seats() {
            if let Some(streak) = record
                .result_for(roster.player(seat))
                .and_then(|r| r.consecutive_wins)
            {
                best[seat] = best[seat].max(streak);
            }
        }
    }
    let value = best.iter().copied().max().unwrap_or(0);
    let players = if value > 0 {
        roster
            .seats()
            .filter(|&seat| best[seat] == value)
            .map(|seat| roster.player(seat).to_string())
            .collect()
    } else {
        Vec::new()
    };
    LongestStreak { value, players }
}

fn label(roster: &Roster, values: &[u32]) -> Vec<(PlayerId, u32)> {
    roster
        .players()
        .iter()
        .cloned()
        .zip(values.iter().copied())
        .collect()
}

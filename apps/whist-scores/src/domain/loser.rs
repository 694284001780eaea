//! Losing streak and master-of-the-month analysis over historical games.
//!
//! Everything here is pure: callers load the records from the score store
//! and pass "today" in, so the results are reproducible in tests.

use time::{Date, Month};

use crate::domain::records::{HistoricalGameRecord, Loser};
use crate::domain::state::{Roster, Seat};

/// Points for the strict leader of a game.
pub const LEADER_POINTS: u32 = 2;
/// Points for the strict runner-up of a game.
pub const RUNNER_UP_POINTS: u32 = 1;

/// Leading rounds, from round 0, where the bet matched the tricks taken.
pub fn consecutive_wins(bets: &[u8], tricks: &[u8]) -> u32 {
    bets.iter()
        .zip(tricks)
        .take_while(|(b, t)| b == t)
        .count() as u32
}

/// Per-seat points for one game: 2 to a strict leader, 1 to a strict
/// runner-up. A tie for either slot awards nothing for that slot.
pub fn game_month_points(record: &HistoricalGameRecord, roster: &Roster) -> Vec<u32> {
    let mut points = vec![0; roster.len()];
    let mut ranked: Vec<(Seat, i32)> = roster
        .seats()
        .filter_map(|seat| record.score_of(roster.player(seat)).map(|s| (seat, s)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    if ranked.len() >= 2 && ranked[0].1 > ranked[1].1 {
        points[ranked[0].0] += LEADER_POINTS;
    }
    // The runner-up slot needs someone behind it to be strictly ahead of.
    if ranked.len() >= 3 && ranked[1].1 > ranked[2].1 {
        points[ranked[1].0] += RUNNER_UP_POINTS;
    }
    points
}

/// Summed game points for a set of games.
pub fn month_points<'a, I>(games: I, roster: &Roster) -> Vec<u32>
where
    I: IntoIterator<Item = &'a HistoricalGameRecord>,
{
    let mut totals = vec![0; roster.len()];
    for game in games {
        for (total, p) in totals.iter_mut().zip(game_month_points(game, roster)) {
            *total += p;
        }
    }
    totals
}

/// Seat with the strictly lowest total, if the two lowest differ.
pub fn month_loser(points: &[u32]) -> Option<Seat> {
    let mut ranked: Vec<(Seat, u32)> = points.iter().copied().enumerate().collect();
    ranked.sort_by_key(|&(_, p)| p);
    match ranked.as_slice() {
        [lowest, next, ..] if lowest.1 < next.1 => Some(lowest.0),
        _ => None,
    }
}

/// Player on a losing streak across the months before `today`'s month.
///
/// Only months of `today`'s year are considered. Months without games are
/// skipped; the streak ends at the first month whose loser differs or is
/// undefined.
pub fn find_loser(records: &[HistoricalGameRecord], roster: &Roster, today: Date) -> Option<Loser> {
    let year = today.year();
    let current_month = u8::from(today.month());

    let mut loser: Option<Seat> = None;
    let mut losing_months = 0u32;

    for month in (1..current_month).rev() {
        let games: Vec<&HistoricalGameRecord> = records
            .iter()
            .filter(|r| r.year() == year && r.month() == month)
            .collect();
        if games.is_empty() {
            continue;
        }

        let month_result = month_loser(&month_points(games, roster));
        match (loser, month_result) {
            (_, None) => break,
            (None, Some(seat)) => {
                loser = Some(seat);
                losing_months = 1;
            }
            (Some(current), Some(seat)) if current == seat => losing_months += 1,
            (Some(_), Some(_)) => break,
        }
    }

    loser.map(|seat| Loser::new(roster.player(seat), losing_months))
}

/// Calendar month before `today`'s month, as (year, month).
pub fn previous_month(today: Date) -> (i32, Month) {
    match today.month() {
        Month::January => (today.year() - 1, Month::December),
        m => (today.year(), m.previous()),
    }
}

/// Per-seat flag: best recorded exact-bet streak of the previous month.
///
/// All false when the month has no games. Otherwise every seat matching the
/// month's best value is a master, even when that best is 0.
pub fn set_master(records: &[HistoricalGameRecord], roster: &Roster, today: Date) -> Vec<bool> {
    let (year, month) = previous_month(today);
    let month = u8::from(month);

    let in_month: Vec<&HistoricalGameRecord> = records
        .iter()
        .filter(|r| r.year() == year && r.month() == month)
        .collect();
    if in_month.is_empty() {
        return vec![false; roster.len()];
    }

    let mut best_per_seat = vec![0u32; roster.len()];
    for record in in_month {
        for seat in roster.seats() {
            let streak = record
                .result_for(roster.player(seat))
                .and_then(|r| r.consecutive_wins)
                .unwrap_or(0);
            best_per_seat[seat] = best_per_seat[seat].max(streak);
        }
    }

    let best = best_per_seat.iter().copied().max().unwrap_or(0);
    best_per_seat.iter().map(|&s| s == best).collect()
}

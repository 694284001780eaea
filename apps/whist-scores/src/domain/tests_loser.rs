use time::macros::date;
use time::{Date, Month, Time};

use crate::domain::loser::{
    consecutive_wins, find_loser, game_month_points, month_loser, previous_month, set_master,
};
use crate::domain::records::{HistoricalGameRecord, Loser, PlayerResult};
use crate::domain::state::Roster;
use crate::domain::test_state_helpers::roster3;

fn game(year: i32, month: u8, day: u8, scores: [i32; 3]) -> HistoricalGameRecord {
    game_with_streaks(year, month, day, scores, [None; 3])
}

fn game_with_streaks(
    year: i32,
    month: u8,
    day: u8,
    scores: [i32; 3],
    streaks: [Option<u32>; 3],
) -> HistoricalGameRecord {
    let month = Month::try_from(month).unwrap();
    let date = Date::from_calendar_date(year, month, day)
        .unwrap()
        .with_time(Time::from_hms(21, 0, 0).unwrap())
        .assume_utc();
    let results = ["gg", "dd", "toto"]
        .iter()
        .zip(scores)
        .zip(streaks)
        .map(|((player, score), streak)| PlayerResult {
            player: player.to_string(),
            score,
            position: None,
            consecutive_wins: streak,
        })
        .collect();
    HistoricalGameRecord {
        date,
        results,
    }
}

/// A game toto clearly loses (gg 2 points, dd 1, toto 0).
fn toto_loses(year: i32, month: u8) -> HistoricalGameRecord {
    game(year, month, 12, [100, 50, 10])
}

fn dd_loses(year: i32, month: u8) -> HistoricalGameRecord {
    game(year, month, 14, [100, 10, 50])
}

#[test]
fn consecutive_wins_counts_leading_exact_rounds() {
    assert_eq!(consecutive_wins(&[1, 0, 2, 1], &[1, 0, 1, 1]), 2);
    assert_eq!(consecutive_wins(&[0, 1], &[1, 1]), 0);
    assert_eq!(consecutive_wins(&[0, 1, 1], &[0, 1, 1]), 3);
    assert_eq!(consecutive_wins(&[], &[]), 0);
}

#[test]
fn game_points_reward_strict_leader_and_runner_up() {
    let roster = roster3();
    assert_eq!(game_month_points(&toto_loses(2025, 3), &roster), vec![2, 1, 0]);
    // tie for the lead: no leader points
    assert_eq!(
        game_month_points(&game(2025, 3, 1, [80, 80, 80]), &roster),
        vec![0, 0, 0]
    );
    // tie behind the leader: no runner-up points
    assert_eq!(
        game_month_points(&game(2025, 3, 1, [90, 20, 20]), &roster),
        vec![2, 0, 0]
    );
}

#[test]
fn two_player_games_only_award_the_leader() {
    let roster = Roster::new(["gg", "dd"]).unwrap();
    let record = game(2025, 3, 1, [30, 10, 0]);
    assert_eq!(game_month_points(&record, &roster), vec![2, 0]);
}

#[test]
fn month_loser_requires_a_strict_bottom() {
    assert_eq!(month_loser(&[4, 2, 0]), Some(2));
    assert_eq!(month_loser(&[4, 1, 1]), None);
    assert_eq!(month_loser(&[0, 3]), Some(0));
}

#[test]
fn three_consecutive_losing_months() {
    let records = vec![
        toto_loses(2025, 4),
        toto_loses(2025, 3),
        toto_loses(2025, 2),
        dd_loses(2025, 1),
        // current month is not considered
        dd_loses(2025, 5),
    ];
    let loser = find_loser(&records, &roster3(), date!(2025 - 05 - 10));
    assert_eq!(loser, Some(Loser::new("toto", 3)));
}

#[test]
fn empty_months_are_skipped() {
    let records = vec![toto_loses(2025, 4), toto_loses(2025, 2), dd_loses(2025, 1)];
    let loser = find_loser(&records, &roster3(), date!(2025 - 05 - 10));
    assert_eq!(loser, Some(Loser::new("toto", 2)));
}

#[test]
fn tied_bottom_breaks_the_streak() {
    let records = vec![
        toto_loses(2025, 4),
        game(2025, 3, 8, [100, 10, 10]),
        toto_loses(2025, 2),
    ];
    let loser = find_loser(&records, &roster3(), date!(2025 - 05 - 10));
    assert_eq!(loser, Some(Loser::new("toto", 1)));

    let undecided = vec![game(2025, 4, 8, [100, 10, 10]), toto_loses(2025, 3)];
    assert_eq!(find_loser(&undecided, &roster3(), date!(2025 - 05 - 10)), None);
}

#[test]
fn streak_stops_at_the_year_boundary() {
    let records = vec![toto_loses(2025, 1), toto_loses(2024, 12), toto_loses(2024, 11)];
    let loser = find_loser(&records, &roster3(), date!(2025 - 02 - 03));
    assert_eq!(loser, Some(Loser::new("toto", 1)));

    assert_eq!(find_loser(&records, &roster3(), date!(2025 - 01 - 20)), None);
}

#[test]
fn month_points_sum_over_games() {
    // dd loses two games, toto one: dd is the month's loser
    let records = vec![dd_loses(2025, 3), dd_loses(2025, 3), toto_loses(2025, 3)];
    let loser = find_loser(&records, &roster3(), date!(2025 - 04 - 01));
    assert_eq!(loser, Some(Loser::new("dd", 1)));
}

#[test]
fn previous_month_wraps_to_december() {
    assert_eq!(previous_month(date!(2025 - 01 - 15)), (2024, Month::December));
    assert_eq!(previous_month(date!(2025 - 07 - 01)), (2025, Month::June));
}

#[test]
fn masters_hold_the_previous_months_best_streak() {
    let records = vec![
        game_with_streaks(2025, 4, 2, [10, 20, 30], [Some(3), Some(5), Some(1)]),
        game_with_streaks(2025, 4, 9, [10, 20, 30], [Some(2), Some(0), Some(5)]),
        // other months do not count
        game_with_streaks(2025, 3, 9, [10, 20, 30], [Some(9), None, None]),
        game_with_streaks(2025, 5, 1, [10, 20, 30], [Some(9), None, None]),
    ];
    let masters = set_master(&records, &roster3(), date!(2025 - 05 - 10));
    assert_eq!(masters, vec![false, true, true]);
}

#[test]
fn masters_in_january_look_at_last_december() {
    let records = vec![game_with_streaks(
        2024,
        12,
        20,
        [10, 20, 30],
        [Some(4), Some(1), None],
    )];
    let masters = set_master(&records, &roster3(), date!(2025 - 01 - 05));
    assert_eq!(masters, vec![true, false, false]);
}

#[test]
fn no_masters_without_games() {
    assert_eq!(
        set_master(&[], &roster3(), date!(2025 - 05 - 10)),
        vec![false; 3]
    );

    // games in other months only
    let elsewhere = vec![game_with_streaks(
        2025,
        3,
        2,
        [10, 20, 30],
        [Some(4), Some(0), None],
    )];
    assert_eq!(
        set_master(&elsewhere, &roster3(), date!(2025 - 05 - 10)),
        vec![false; 3]
    );
}

#[test]
fn zero_streak_month_makes_everyone_master() {
    let zero_streaks = vec![game_with_streaks(
        2025,
        4,
        2,
        [10, 20, 30],
        [Some(0), Some(0), Some(0)],
    )];
    assert_eq!(
        set_master(&zero_streaks, &roster3(), date!(2025 - 05 - 10)),
        vec![true; 3]
    );
}

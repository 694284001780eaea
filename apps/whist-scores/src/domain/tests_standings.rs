use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::records::{HistoricalGameRecord, PlayerResult};
use crate::domain::standings::{game_points, longest_streaks, month_tallies, monthly_summaries};
use crate::domain::test_state_helpers::roster3;

fn record(
    date: OffsetDateTime,
    lines: [(i32, Option<u8>, Option<u32>); 3],
) -> HistoricalGameRecord {
    HistoricalGameRecord {
        date,
        results: ["gg", "dd", "toto"]
            .iter()
            .zip(lines)
            .map(|(player, (score, position, streak))| PlayerResult {
                player: player.to_string(),
                score,
                position,
                consecutive_wins: streak,
            })
            .collect(),
    }
}

#[test]
fn recorded_positions_decide_game_points() {
    // dd won on the tie-break even though the scores match
    let r = record(
        datetime!(2025-03-01 20:00 UTC),
        [(60, Some(2), None), (60, Some(1), None), (10, Some(3), None)],
    );
    assert_eq!(game_points(&r, &roster3()), vec![1, 2, 0]);
}

#[test]
fn scores_decide_game_points_without_positions() {
    let roster = roster3();
    let tie_for_top = record(
        datetime!(2025-03-01 20:00 UTC),
        [(50, None, None), (50, None, None), (10, None, None)],
    );
    assert_eq!(game_points(&tie_for_top, &roster), vec![2, 2, 0]);

    let tie_behind = record(
        datetime!(2025-03-01 20:00 UTC),
        [(90, None, None), (40, None, None), (40, None, None)],
    );
    assert_eq!(game_points(&tie_behind, &roster), vec![2, 1, 1]);

    // positions only partially recorded fall back to scores
    let partial = record(
        datetime!(2025-03-01 20:00 UTC),
        [(10, Some(3), None), (90, None, None), (40, Some(2), None)],
    );
    assert_eq!(game_points(&partial, &roster), vec![0, 2, 1]);
}

#[test]
fn tallies_follow_the_descending_order() {
    assert_eq!(month_tallies(&[4, 2, 2]), vec![2, 1, 1]);
    assert_eq!(month_tallies(&[3, 3, 1]), vec![2, 2, 0]);
    assert_eq!(month_tallies(&[0, 5, 3]), vec![0, 2, 1]);
}

#[test]
fn monthly_summaries_cover_the_requested_year_in_order() {
    let records = vec![
        record(
            datetime!(2025-06-10 20:00 UTC),
            [(10, None, None), (90, None, None), (40, None, None)],
        ),
        record(
            datetime!(2025-02-10 20:00 UTC),
            [(90, None, None), (40, None, None), (10, None, None)],
        ),
        record(
            datetime!(2025-02-11 20:00 UTC),
            [(90, None, None), (10, None, None), (40, None, None)],
        ),
        record(
            datetime!(2024-02-11 20:00 UTC),
            [(90, None, None), (10, None, None), (40, None, None)],
        ),
    ];
    let summaries = monthly_summaries(&records, &roster3(), 2025);
    assert_eq!(summaries.len(), 2);

    let feb = &summaries[0];
    assert_eq!(feb.month, 2);
    assert_eq!(feb.games, 2);
    assert_eq!(
        feb.points,
        vec![("gg".into(), 4), ("dd".into(), 1), ("toto".into(), 1)]
    );
    assert_eq!(
        feb.tallies,
        vec![("gg".into(), 2), ("dd".into(), 1), ("toto".into(), 1)]
    );

    assert_eq!(summaries[1].month, 6);
    assert_eq!(summaries[1].games, 1);
}

#[test]
fn longest_streak_lists_every_holder() {
    let records = vec![
        record(
            datetime!(2025-01-10 20:00 UTC),
            [(0, None, Some(4)), (0, None, Some(2)), (0, None, None)],
        ),
        record(
            datetime!(2025-05-10 20:00 UTC),
            [(0, None, Some(1)), (0, None, Some(2)), (0, None, Some(4))],
        ),
        record(
            datetime!(2024-05-10 20:00 UTC),
            [(0, None, Some(9)), (0, None, None), (0, None, None)],
        ),
    ];
    let best = longest_streaks(&records, &roster3(), 2025);
    assert_eq!(best.value, 4);
    assert_eq!(best.players, vec!["gg".to_string(), "toto".to_string()]);

    let none = longest_streaks(&records, &roster3(), 2023);
    assert_eq!(none.value, 0);
    assert!(none.players.is_empty());
}

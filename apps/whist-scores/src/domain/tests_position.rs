use crate::domain::position::{determine_position, positions, Position};
use crate::domain::state::Roster;
use crate::domain::test_state_helpers::{roster3, state_with_scores};

use Position::{First, Last, Middle};

#[test]
fn distinct_scores_rank_directly() {
    let state = state_with_scores(roster3(), 0, &[vec![5], vec![20], vec![-5]]);
    assert_eq!(positions(&state), vec![Middle, First, Last]);
}

#[test]
fn tie_for_first_is_shared() {
    let state = state_with_scores(roster3(), 0, &[vec![20], vec![20], vec![10]]);
    assert_eq!(positions(&state), vec![First, First, Last]);

    let all_tied = state_with_scores(roster3(), 0, &[vec![10], vec![10], vec![10]]);
    assert_eq!(positions(&all_tied), vec![First, First, First]);
}

#[test]
fn bottom_tie_uses_most_recent_differing_round() {
    // equal now, equal after round 2, but dd was behind after round 1
    let state = state_with_scores(
        roster3(),
        0,
        &[vec![10, 20, 30], vec![10, 5, 10], vec![10, 15, 10]],
    );
    assert_eq!(determine_position(&state, 1), Last);
    assert_eq!(determine_position(&state, 2), Middle);
    assert_eq!(determine_position(&state, 0), First);
}

#[test]
fn bottom_tie_is_decided_by_round_three() {
    // dd was behind after round 1, but toto was behind after round 3
    let histories = [
        vec![10, 20, 30, 40, 50],
        vec![0, 5, 5, 15, 20],
        vec![0, 10, 5, 10, 20],
    ];
    for dealer in 0..3 {
        let state = state_with_scores(roster3(), dealer, &histories);
        assert_eq!(positions(&state), vec![First, Middle, Last], "dealer {dealer}");
    }
}

#[test]
fn identical_histories_fall_back_to_dealer_seating() {
    let histories = [vec![10, 10, 10], vec![0, 0, 0], vec![0, 0, 0]];

    // the dealer ranks lowest
    let dd_deals = state_with_scores(roster3(), 1, &histories);
    assert_eq!(positions(&dd_deals), vec![First, Last, Middle]);

    let toto_deals = state_with_scores(roster3(), 2, &histories);
    assert_eq!(positions(&toto_deals), vec![First, Middle, Last]);

    // otherwise the seat closest to the dealer's left ranks lower
    let gg_deals = state_with_scores(roster3(), 0, &histories);
    assert_eq!(positions(&gg_deals), vec![First, Last, Middle]);
}

#[test]
fn three_way_bottom_tie_is_all_last() {
    let roster = Roster::new(["a", "b", "c", "d"]).unwrap();
    let state = state_with_scores(roster, 0, &[vec![40], vec![0], vec![0], vec![0]]);
    assert_eq!(positions(&state), vec![First, Last, Last, Last]);
}

#[test]
fn two_players_are_first_and_last() {
    let roster = Roster::new(["a", "b"]).unwrap();
    let state = state_with_scores(roster, 0, &[vec![5], vec![10]]);
    assert_eq!(positions(&state), vec![Last, First]);
}

#[test]
fn ranks_are_one_based() {
    assert_eq!(First.rank(), 1);
    assert_eq!(Middle.rank(), 2);
    assert_eq!(Last.rank(), 3);
}

use crate::domain::bonus::{assign_bonus_cards, NO_BONUS, ONE_CARD, TWO_CARDS};
use crate::domain::records::Loser;
use crate::domain::state::GameState;
use crate::domain::test_state_helpers::{roster3, state_with_scores};

/// Round 3 state with the given current scores (flat history).
fn round3(scores: [i32; 3]) -> GameState {
    let histories: Vec<Vec<i32>> = scores.iter().map(|&s| vec![s; 3]).collect();
    state_with_scores(roster3(), 0, &histories)
}

#[test]
fn no_bonus_before_round_three() {
    let mut state = state_with_scores(roster3(), 0, &[vec![50, 60], vec![0, 0], vec![5, 5]]);
    state.bonus_cards = vec![2, 2, 2];
    assign_bonus_cards(&mut state);
    assert_eq!(state.bonus_cards, vec![NO_BONUS; 3]);
    assert_eq!(state.last_player, None);
}

#[test]
fn exactly_half_of_second_place_earns_two_cards() {
    let mut state = round3([40, 20, 10]);
    assign_bonus_cards(&mut state);
    assert_eq!(state.bonus_cards, vec![NO_BONUS, ONE_CARD, TWO_CARDS]);
    assert_eq!(state.last_player, Some(2));
}

#[test]
fn one_point_above_half_earns_one_card() {
    let mut state = round3([40, 20, 11]);
    assign_bonus_cards(&mut state);
    assert_eq!(state.bonus_cards, vec![NO_BONUS, ONE_CARD, ONE_CARD]);
}

#[test]
fn tie_for_first_compares_last_against_the_leaders() {
    let mut state = round3([30, 30, 15]);
    assign_bonus_cards(&mut state);
    assert_eq!(state.bonus_cards, vec![NO_BONUS, NO_BONUS, TWO_CARDS]);
}

#[test]
fn negative_last_score_is_always_far_behind() {
    let mut state = round3([10, 5, -5]);
    assign_bonus_cards(&mut state);
    assert_eq!(state.bonus_cards[2], TWO_CARDS);
}

#[test]
fn loser_in_last_place_always_gets_two() {
    let mut state = round3([40, 20, 15]);
    state.loser = Some(Loser::new("toto", 1));
    assign_bonus_cards(&mut state);
    assert_eq!(state.bonus_cards, vec![NO_BONUS, ONE_CARD, TWO_CARDS]);
}

#[test]
fn loser_in_the_middle_needs_more_than_one_month() {
    let mut state = round3([40, 20, 15]);
    state.loser = Some(Loser::new("dd", 1));
    assign_bonus_cards(&mut state);
    assert_eq!(state.bonus_cards[1], ONE_CARD);

    state.loser = Some(Loser::new("dd", 2));
    assign_bonus_cards(&mut state);
    assert_eq!(state.bonus_cards[1], TWO_CARDS);
}

#[test]
fn leading_loser_gets_nothing() {
    let mut state = round3([40, 20, 15]);
    state.loser = Some(Loser::new("gg", 4));
    assign_bonus_cards(&mut state);
    assert_eq!(state.bonus_cards[0], NO_BONUS);
}

#[test]
fn last_player_follows_the_bottom_seat() {
    let mut state = round3([40, 20, 15]);
    assign_bonus_cards(&mut state);
    assert_eq!(state.last_player, Some(2));

    for (ledger, score) in state.ledgers.iter_mut().zip([40, 10, 15]) {
        ledger.scores[2] = score;
    }
    assign_bonus_cards(&mut state);
    assert_eq!(state.last_player, Some(1));
}

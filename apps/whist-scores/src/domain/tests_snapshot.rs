use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::records::Loser;
use crate::domain::round_engine::{new_game, submit_bets, submit_tricks};
use crate::domain::snapshot::{restore, snapshot};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{first_seat_takes_all, roster3, uniform_bets};
use crate::errors::domain::{DomainError, InfraErrorKind};

fn mid_game() -> crate::domain::state::GameState {
    let mut state = new_game(roster3(), 0, Some(Loser::new("dd", 2)));
    let roster = state.roster.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for round in 0..4 {
        submit_bets(&mut state, &uniform_bets(&roster, 0), &mut rng).unwrap();
        submit_tricks(&mut state, &first_seat_takes_all(&roster, round)).unwrap();
    }
    submit_bets(&mut state, &uniform_bets(&roster, 1), &mut rng).unwrap();
    state.is_master = vec![false, true, false];
    state
}

#[test]
fn snapshot_restores_an_equal_state() {
    let state = mid_game();
    assert_eq!(state.phase, Phase::ScoreInput);

    let snap = snapshot(&state);
    assert_eq!(snap.dealer, state.roster.player(state.dealer));
    assert_eq!(snap.last_player.as_deref(), Some("gg"));
    assert_eq!(snap.bets["toto"].len(), 5);

    let json = serde_json::to_string(&snap).unwrap();
    let back = serde_json::from_str(&json).unwrap();
    assert_eq!(restore(back).unwrap(), state);
}

#[test]
fn snapshot_of_a_fresh_game_restores() {
    let state = new_game(roster3(), 1, None);
    assert_eq!(restore(snapshot(&state)).unwrap(), state);
}

#[test]
fn out_of_step_histories_are_reported_as_corruption() {
    let mut snap = snapshot(&mid_game());
    if let Some(scores) = snap.scores.get_mut("dd") {
        scores.pop();
    }
    let err = restore(snap).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
}

#[test]
fn unknown_dealer_is_reported_as_corruption() {
    let mut snap = snapshot(&mid_game());
    snap.dealer = "zz".into();
    assert!(matches!(
        restore(snap),
        Err(DomainError::Infra(InfraErrorKind::DataCorruption, _))
    ));
}

#[test]
fn phase_without_round_is_rejected() {
    let mut snap = snapshot(&new_game(roster3(), 0, None));
    snap.current_round = None;
    snap.phase = Phase::ScoreInput;
    assert!(restore(snap).is_err());
}

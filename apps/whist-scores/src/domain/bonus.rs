use tracing::debug;

use crate::domain::position::{determine_position, Position};
use crate::domain::rules::FIRST_BONUS_ROUND;
use crate::domain::state::{GameState, Seat};

pub const NO_BONUS: u8 = 0;
pub const ONE_CARD: u8 = 1;
pub const TWO_CARDS: u8 = 2;

/// Recompute every seat's bonus card level for the current round.
///
/// Also records the seat that ends up last as `last_player`.
pub fn assign_bonus_cards(state: &mut GameState) {
    let n = state.roster.len();
    let round = match state.round {
        Some(r) if r >= FIRST_BONUS_ROUND => r,
        _ => {
            state.bonus_cards = vec![NO_BONUS; n];
            return;
        }
    };

    let positions: Vec<Position> = state
        .roster
        .seats()
        .map(|seat| determine_position(state, seat))
        .collect();
    let loser_seat = state.loser_seat();
    let loser_months = state.loser.as_ref().map(|l| l.losing_months).unwrap_or(0);

    let mut cards = vec![NO_BONUS; n];
    for seat in state.roster.seats() {
        let is_loser = loser_seat == Some(seat);
        cards[seat] = match positions[seat] {
            Position::First => NO_BONUS,
            Position::Middle => {
                if is_loser && loser_months > 1 {
                    TWO_CARDS
                } else {
                    ONE_CARD
                }
            }
            Position::Last => {
                state.last_player = Some(seat);
                let far_behind = reference_score(state, &positions, seat)
                    .map(|reference| state.current_score(seat) * 2 <= reference)
                    .unwrap_or(false);
                if is_loser || far_behind {
                    TWO_CARDS
                } else {
                    ONE_CARD
                }
            }
        };
    }

    debug!(round, ?cards, "Bonus cards assigned");
    state.bonus_cards = cards;
}

/// Score the last seat is compared against: the lowest score among the
/// players ranked above it (the second-place score in a three-player game).
fn reference_score(state: &GameState, positions: &[Position], seat: Seat) -> Option<i32> {
    state
        .roster
        .seats()
        .filter(|&other| other != seat && positions[other] != Position::Last)
        .map(|other| state.current_score(other))
        .min()
}

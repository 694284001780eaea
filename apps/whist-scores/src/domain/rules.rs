use std::ops::RangeInclusive;

/// Rounds per game; round indices run `0..ROUNDS`.
pub const ROUNDS: u8 = 12;
/// Index of the final round, where the bet-total bonus is applied.
pub const FINAL_ROUND: u8 = ROUNDS - 1;
/// Bonus cards are only handed out from this round index on.
pub const FIRST_BONUS_ROUND: u8 = 3;
/// Awarded to the unique highest bet total after the final round.
pub const FINAL_BET_BONUS: i32 = 15;
pub const MIN_PLAYERS: usize = 2;

// Card schedule: 1, 1, 1, then 2, 3, ... (round index − 1).
pub fn cards_for_round(round: u8) -> u8 {
    if round < 3 {
        1
    } else {
        round - 1
    }
}

pub fn valid_bet_range(round: u8) -> RangeInclusive<u8> {
    0..=cards_for_round(round)
}

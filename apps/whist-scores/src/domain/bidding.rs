use std::collections::HashMap;

use rand::Rng;

use crate::domain::rules::valid_bet_range;
use crate::domain::state::{PlayerId, Roster};
use crate::errors::domain::{DomainError, ValidationKind};

/// Validate submitted bets and draw the missing ones.
///
/// `None` means the player did not choose; a uniformly random bet in the
/// legal range is drawn for them. The key set must equal the roster. Nothing
/// is drawn unless every submitted bet is valid.
pub fn resolve_bets<R: Rng + ?Sized>(
    roster: &Roster,
    round: u8,
    bets: &HashMap<PlayerId, Option<u8>>,
    rng: &mut R,
) -> Result<Vec<u8>, DomainError> {
    if bets.len() != roster.len() || roster.players().iter().any(|p| !bets.contains_key(p)) {
        return Err(DomainError::validation(
            ValidationKind::RosterMismatch,
            format!(
                "bets submitted for {} players, roster has {}",
                bets.len(),
                roster.len()
            ),
        ));
    }

    let range = valid_bet_range(round);
    for player in roster.players() {
        if let Some(Some(bet)) = bets.get(player) {
            if !range.contains(bet) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidBet,
                    format!(
                        "bet {bet} for '{player}' outside {}..={}",
                        range.start(),
                        range.end()
                    ),
                ));
            }
        }
    }

    let resolved = roster
        .players()
        .iter()
        .map(|player| match bets.get(player).copied().flatten() {
            Some(bet) => bet,
            None => rng.random_range(range.clone()),
        })
        .collect();
    Ok(resolved)
}

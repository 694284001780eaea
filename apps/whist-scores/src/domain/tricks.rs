//! Trick entry normalization.
//!
//! Only the first N−1 players' tricks are entered freely. Each of them is
//! capped at what is still available after the players before them, and the
//! last player gets whatever remains, so the counts always add up to the cards
//! dealt.

use std::collections::HashMap;

use crate::domain::state::{PlayerId, Roster};
use crate::errors::domain::{DomainError, ValidationKind};

/// Normalize raw trick counts into a per-seat vector summing to `cards`.
///
/// The last roster player's entry is optional and always ignored. Every other
/// roster player must be present; unknown names are rejected.
pub fn normalize_tricks(
    roster: &Roster,
    raw: &HashMap<PlayerId, u8>,
    cards: u8,
) -> Result<Vec<u8>, DomainError> {
    if let Some(unknown) = raw.keys().find(|p| roster.seat_of(p).is_none()) {
        return Err(DomainError::validation(
            ValidationKind::RosterMismatch,
            format!("tricks submitted for unknown player '{unknown}'"),
        ));
    }

    let last = roster.last_seat();
    let mut remaining = cards;
    let mut normalized = Vec::with_capacity(roster.len());
    for seat in roster.seats() {
        if seat == last {
            normalized.push(remaining);
            break;
        }
        let player = roster.player(seat);
        let entered = raw.get(player).copied().ok_or_else(|| {
            DomainError::validation(
                ValidationKind::RosterMismatch,
                format!("missing tricks for '{player}'"),
            )
        })?;
        let taken = entered.min(remaining);
        remaining -= taken;
        normalized.push(taken);
    }

    let sum: u32 = normalized.iter().map(|&t| t as u32).sum();
    if sum != cards as u32 {
        return Err(DomainError::validation(
            ValidationKind::InvalidTricks,
            format!("tricks sum to {sum}, expected {cards}"),
        ));
    }
    Ok(normalized)
}

//! Error codes for the whist scores engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Codes are
//! SCREAMING_SNAKE_CASE and are what the CLI prints and logs carry.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input validation
    /// Bet outside the legal range for the round
    InvalidBet,
    /// Tricks do not sum to the cards dealt
    InvalidTricks,
    /// Player keys do not match the roster
    RosterMismatch,
    /// Operation not allowed in the current phase
    PhaseMismatch,
    /// Player is not part of the roster
    UnknownPlayer,
    /// Roster is too small or has duplicates
    InvalidRoster,
    /// General validation error
    ValidationError,

    // Stores
    /// Score or state store unreachable
    StoreUnavailable,
    /// Stored data failed to decode
    DataCorruption,
    /// File system failure
    IoError,
    /// JSON encoding/decoding failure
    SerializationError,

    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBet => "INVALID_BET",
            Self::InvalidTricks => "INVALID_TRICKS",
            Self::RosterMismatch => "ROSTER_MISMATCH",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::InvalidRoster => "INVALID_ROSTER",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::IoError => "IO_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",

            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

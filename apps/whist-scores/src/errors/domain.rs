//! Domain-level error type used by the rules engine and the stores.
//!
//! This error type knows nothing about files, terminals or the score store
//! backend. Callers at the application edge convert it into
//! `crate::error::AppError` through the provided `From` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a rule operation rejected its input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// A bet lies outside `0..=cards_for_round`.
    InvalidBet,
    /// Tricks do not add up to the cards dealt, or a trick count is missing.
    InvalidTricks,
    /// Submitted player keys do not match the roster.
    RosterMismatch,
    /// The operation is not allowed in the current phase.
    PhaseMismatch,
    /// A player name is not part of the roster.
    UnknownPlayer,
    /// Roster too small or containing duplicates.
    InvalidRoster,
    Other(String),
}

/// Infra error kinds to distinguish operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// Score or state store could not be reached.
    StoreUnavailable,
    /// Persisted data could not be decoded or is inconsistent.
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input rejected before any state was touched
    Validation(ValidationKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "invalid input {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// True for errors the caller should answer by re-prompting for input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::Validation(..))
    }
}

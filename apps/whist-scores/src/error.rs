use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Store unavailable: {detail}")]
    StoreUnavailable { detail: String },
    #[error("Data corruption: {detail}")]
    DataCorruption { detail: String },
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("Serialization error: {detail}")]
    Serialization { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Error code carried in logs and printed by the CLI.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::StoreUnavailable { .. } => ErrorCode::StoreUnavailable,
            AppError::DataCorruption { .. } => ErrorCode::DataCorruption,
            AppError::Io { .. } => ErrorCode::IoError,
            AppError::Serialization { .. } => ErrorCode::SerializationError,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::StoreUnavailable { detail }
            | AppError::DataCorruption { detail }
            | AppError::Io { detail }
            | AppError::Serialization { detail }
            | AppError::Config { detail }
            | AppError::Internal { detail } => detail,
        }
    }

    /// Input errors are answered by re-prompting; everything else is operational.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AppError::Validation { .. })
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn store_unavailable(detail: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::InvalidBet => ErrorCode::InvalidBet,
                    ValidationKind::InvalidTricks => ErrorCode::InvalidTricks,
                    ValidationKind::RosterMismatch => ErrorCode::RosterMismatch,
                    ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                    ValidationKind::UnknownPlayer => ErrorCode::UnknownPlayer,
                    ValidationKind::InvalidRoster => ErrorCode::InvalidRoster,
                    _ => ErrorCode::ValidationError,
                };
                AppError::Validation { code, detail }
            }
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::StoreUnavailable => AppError::StoreUnavailable { detail },
                InfraErrorKind::DataCorruption => AppError::DataCorruption { detail },
                _ => AppError::Internal { detail },
            },
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io {
            detail: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization {
            detail: e.to_string(),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

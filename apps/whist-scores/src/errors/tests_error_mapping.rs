// Unit tests for error mapping - pure domain logic without any store
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds_to_codes() {
    let cases = [
        (ValidationKind::InvalidBet, ErrorCode::InvalidBet),
        (ValidationKind::InvalidTricks, ErrorCode::InvalidTricks),
        (ValidationKind::RosterMismatch, ErrorCode::RosterMismatch),
        (ValidationKind::PhaseMismatch, ErrorCode::PhaseMismatch),
        (ValidationKind::UnknownPlayer, ErrorCode::UnknownPlayer),
        (ValidationKind::InvalidRoster, ErrorCode::InvalidRoster),
        (
            ValidationKind::Other("anything".into()),
            ErrorCode::ValidationError,
        ),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "bad input").into();
        assert_eq!(app.code(), code);
        assert!(app.is_invalid_input());
        assert_eq!(app.detail(), "bad input");
    }
}

#[test]
fn maps_infra() {
    let down: AppError = DomainError::infra(InfraErrorKind::StoreUnavailable, "offline").into();
    assert_eq!(down.code().as_str(), "STORE_UNAVAILABLE");
    assert!(matches!(down, AppError::StoreUnavailable { .. }));
    assert!(!down.is_invalid_input());

    let corrupt: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad json").into();
    assert_eq!(corrupt.code().as_str(), "DATA_CORRUPTION");

    let other: AppError =
        DomainError::infra(InfraErrorKind::Other("disk".into()), "weird").into();
    assert_eq!(other.code(), ErrorCode::Internal);
}

#[test]
fn maps_io_and_json_errors() {
    let io: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert_eq!(io.code(), ErrorCode::IoError);

    let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
    let app: AppError = json_err.into();
    assert_eq!(app.code(), ErrorCode::SerializationError);
}

#[test]
fn display_includes_detail() {
    let err = DomainError::validation(ValidationKind::InvalidBet, "bet 4 > 3");
    assert!(err.to_string().contains("bet 4 > 3"));
    assert!(err.is_invalid_input());

    let app = AppError::config("WHIST_ROSTER is empty");
    assert_eq!(app.to_string(), "Configuration error: WHIST_ROSTER is empty");
}

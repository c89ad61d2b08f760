//! Mapping of driver errors onto domain errors

use mongodb::error::{Error, ErrorKind, WriteFailure};

use gavel_core::errors::{DomainError, PersistenceError};

const DUPLICATE_KEY: i32 = 11000;

/// Translate a failed write of `operation`
pub(crate) fn write_error(operation: &str, err: Error) -> DomainError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteConcernError(_)) => PersistenceError::NotAcknowledged {
            operation: operation.to_string(),
        }
        .into(),
        _ => DomainError::database(format!("{}: {}", operation, err)),
    }
}

/// Translate a failed read
pub(crate) fn read_error(operation: &str, err: Error) -> DomainError {
    DomainError::database(format!("{}: {}", operation, err))
}

/// Whether a single-document write hit a unique index
pub(crate) fn is_duplicate_key(err: &Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}

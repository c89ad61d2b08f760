//! Domain-specific error types for authentication, tokens, persistence and imports
//!
//! The presentation layer maps each variant to an HTTP status; the messages
//! here are the ones clients see.

use thiserror::Error;

/// Authentication-related errors
///
/// `InvalidCredentials` deliberately covers unknown users, wrong passwords
/// and stale token versions so callers cannot tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token-related errors raised while signing or verifying JWTs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Persistence failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The store did not confirm the write
    #[error("{operation} was not acknowledged")]
    NotAcknowledged { operation: String },

    /// A targeted update matched no document
    #[error("{operation} matched no document")]
    NoMatch { operation: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

/// Errors that abort a CSV import as a whole
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The buffer could not be tokenized as CSV
    #[error("Malformed CSV data: {message}")]
    MalformedCsv { message: String },

    /// The import source could not be read
    #[error("Unable to read import source: {message}")]
    Source { message: String },
}

//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, ImportError, PersistenceError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Import(#[from] ImportError),
}

impl DomainError {
    /// Shorthand for a database failure carrying the driver's message
    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Persistence(PersistenceError::Database {
            message: message.into(),
        })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests;

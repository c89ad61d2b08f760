//! User repository trait defining the interface for credential persistence.
//!
//! The trait is async-first and keeps the storage engine out of the
//! authentication flow; the MongoDB implementation lives in the
//! infrastructure crate.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUserCredentials, UserCredentials};
use crate::errors::DomainError;

/// Repository trait for user credential persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use gavel_core::repositories::UserRepository;
/// use gavel_core::domain::entities::user::{NewUserCredentials, UserCredentials};
/// use gavel_core::errors::DomainError;
///
/// struct FileUserRepository;
///
/// #[async_trait]
/// impl UserRepository for FileUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError> {
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn create_user_credentials(&self, user: NewUserCredentials) -> Result<(), DomainError> { Ok(()) }
/// #   async fn increment_token_version(&self, user_id: &str) -> Result<i64, DomainError> { Ok(1) }
/// #   async fn is_healthy(&self) -> bool { true }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether an account exists for `email`
    ///
    /// # Returns
    /// * `Ok(true)` - An account is registered with this email
    /// * `Ok(false)` - The email is free
    /// * `Err(DomainError)` - Database error occurred
    async fn user_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Find a user by email
    ///
    /// # Returns
    /// * `Ok(Some(UserCredentials))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError>;

    /// Store credentials for a new account
    ///
    /// Fails with `PersistenceError::NotAcknowledged` when the store does
    /// not confirm the insert, and with `AuthError::UserAlreadyExists` when
    /// the unique email constraint rejects it.
    async fn create_user_credentials(&self, user: NewUserCredentials) -> Result<(), DomainError>;

    /// Atomically add one to the user's token version
    ///
    /// Must be a single conditional update, never read-then-write, so that
    /// concurrent logins each observe a distinct version.
    ///
    /// # Returns
    /// * `Ok(version)` - The version after the increment
    /// * `Err(DomainError)` - No user matched `user_id`, or the write failed
    async fn increment_token_version(&self, user_id: &str) -> Result<i64, DomainError>;

    /// Liveness probe for the backing store; never fails, returns `false`
    /// on any underlying error
    async fn is_healthy(&self) -> bool;
}

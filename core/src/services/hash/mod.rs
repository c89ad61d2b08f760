//! Password hashing

mod bcrypt_hasher;

pub use bcrypt_hasher::BcryptHasher;

use async_trait::async_trait;

use crate::errors::DomainError;

/// One-way password hashing with the salt embedded in the output
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext` into an opaque string
    async fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Compare `plaintext` against a hash produced by [`PasswordHasher::hash`]
    ///
    /// An unparseable hash compares as `false`.
    async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, DomainError>;
}

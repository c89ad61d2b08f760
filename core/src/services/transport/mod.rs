//! Seams to the remote authentication service
//!
//! The auction API never sees JWT secrets; it asks the auth API whether a
//! bearer token is valid. Implementations live in the infrastructure crate.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Validates bearer tokens on behalf of a guarded route
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// # Returns
    /// * `Ok(true)` - The token is currently valid
    /// * `Ok(false)` - The auth service rejected the token
    /// * `Err(DomainError)` - The auth service could not be reached
    async fn validate_token(&self, token: &str) -> Result<bool, DomainError>;
}

/// Liveness of the remote authentication service
#[async_trait]
pub trait AuthServiceHealth: Send + Sync {
    /// Never fails; `false` on any transport error or non-ok status
    async fn is_healthy(&self) -> bool;
}

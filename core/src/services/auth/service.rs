//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::UserJwtPayload;
use crate::domain::entities::user::NewUserCredentials;
use crate::domain::value_objects::{LoginResponse, RegisterResponse};
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::hash::PasswordHasher;
use crate::services::token::TokenSigner;

/// Authentication service for the register / login / validate flow
pub struct AuthService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenSigner,
{
    /// User repository for credential persistence
    user_repository: Arc<U>,
    /// Password hasher
    hasher: Arc<H>,
    /// JWT signer
    token_signer: Arc<T>,
}

impl<U, H, T> AuthService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenSigner,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for credential persistence
    /// * `hasher` - Password hasher
    /// * `token_signer` - Signer holding the JWT secret and lifetime
    pub fn new(user_repository: Arc<U>, hasher: Arc<H>, token_signer: Arc<T>) -> Self {
        Self {
            user_repository,
            hasher,
            token_signer,
        }
    }

    /// Register a new account with token version 0
    ///
    /// # Returns
    ///
    /// * `Ok(RegisterResponse)` - Account created
    /// * `Err(AuthError::UserAlreadyExists)` - The email is taken
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<RegisterResponse> {
        if self.user_repository.user_exists(email).await? {
            tracing::debug!(email, "Registration rejected, email already taken");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let hashed = self.hasher.hash(password).await?;
        self.user_repository
            .create_user_credentials(NewUserCredentials::new(email, hashed))
            .await?;

        tracing::info!(email, "User registered");
        Ok(RegisterResponse::for_email(email))
    }

    /// Check the password, bump the token version and issue a token for it
    ///
    /// Unknown email and wrong password fail identically.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginResponse)` - Token carrying the new token version
    /// * `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResponse> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token_version = self
            .user_repository
            .increment_token_version(&user.id)
            .await?;

        let payload =
            UserJwtPayload::new(&user, token_version, self.token_signer.expires_in_seconds())
                .ok_or(TokenError::TokenGenerationFailed)?;
        let access_token = self.token_signer.sign(&payload)?;

        tracing::info!(user_id = %user.id, token_version, "User logged in");
        Ok(LoginResponse::new(access_token))
    }

    /// Verify a token and check it against the persisted token version
    ///
    /// # Returns
    ///
    /// * `Ok(UserJwtPayload)` - Token is valid and current
    /// * `Err(DomainError::Token)` - Bad signature, malformed or expired token
    /// * `Err(AuthError::InvalidCredentials)` - User gone or token version superseded
    pub async fn validate_token(&self, token: &str) -> DomainResult<UserJwtPayload> {
        let payload = self.token_signer.verify(token)?;

        let user = self
            .user_repository
            .find_by_email(&payload.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.accepts_token_version(payload.token_version) {
            tracing::debug!(
                user_id = %user.id,
                presented = payload.token_version,
                current = user.token_version,
                "Rejected superseded token"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(payload)
    }
}

//! Authentication routes under `/auth`

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use gavel_core::errors::{DomainError, TokenError};
use gavel_core::repositories::UserRepository;
use gavel_core::services::{AuthHealthService, AuthService, PasswordHasher, TokenSigner};

use crate::dto::{CredentialsRequest, ValidateTokenRequest, ValidateTokenResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

/// Application state that holds the auth API services
pub struct AuthAppState<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenSigner,
{
    pub auth_service: Arc<AuthService<U, H, T>>,
    pub health_service: Arc<AuthHealthService<U>>,
}

impl<U, H, T> AuthAppState<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenSigner,
{
    pub fn new(repository: Arc<U>, hasher: Arc<H>, signer: Arc<T>) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(repository.clone(), hasher, signer)),
            health_service: Arc::new(AuthHealthService::new(repository)),
        }
    }
}

/// Handler for POST /auth/register
pub async fn register<U, H, T>(
    state: web::Data<AuthAppState<U, H, T>>,
    request: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenSigner + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state
        .auth_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /auth/login
pub async fn login<U, H, T>(
    state: web::Data<AuthAppState<U, H, T>>,
    request: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenSigner + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /auth/validate
///
/// Anything but a credentials failure is reported as an invalid token.
pub async fn validate<U, H, T>(
    state: web::Data<AuthAppState<U, H, T>>,
    request: web::Json<ValidateTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenSigner + 'static,
{
    match state.auth_service.validate_token(&request.token).await {
        Ok(user) => HttpResponse::Created().json(ValidateTokenResponse {
            is_valid: true,
            user,
        }),
        Err(e @ DomainError::Auth(_)) | Err(e @ DomainError::Token(_)) => handle_domain_error(e),
        Err(e) => {
            log::error!("Token validation failed: {}", e);
            handle_domain_error(TokenError::InvalidTokenFormat.into())
        }
    }
}

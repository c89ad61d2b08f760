use std::sync::Arc;

use chrono::Utc;

use super::mocks::PlainHasher;
use crate::domain::entities::token::UserJwtPayload;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::AuthService;
use crate::services::hash::BcryptHasher;
use crate::services::token::{JwtTokenSigner, TokenSigner, TokenSignerConfig};

type TestAuthService = AuthService<MockUserRepository, PlainHasher, JwtTokenSigner>;

struct Fixture {
    repo: Arc<MockUserRepository>,
    hasher: Arc<PlainHasher>,
    signer: Arc<JwtTokenSigner>,
    service: TestAuthService,
}

fn fixture() -> Fixture {
    let repo = Arc::new(MockUserRepository::new());
    let hasher = Arc::new(PlainHasher::default());
    let signer = Arc::new(JwtTokenSigner::new(TokenSignerConfig::new("test-secret", 3600)));
    let service = AuthService::new(repo.clone(), hasher.clone(), signer.clone());
    Fixture {
        repo,
        hasher,
        signer,
        service,
    }
}

#[tokio::test]
async fn test_register_stores_hashed_password_with_version_zero() {
    let f = fixture();

    let response = f.service.register("a@b.com", "pw").await.unwrap();

    assert_eq!(response.message, "User a@b.com registered");
    let user = f.repo.find_by_email("a@b.com").await.unwrap().unwrap();
    assert_eq!(user.password, "plain$pw");
    assert_eq!(user.token_version, 0);
}

#[tokio::test]
async fn test_register_twice_fails() {
    let f = fixture();
    f.service.register("a@b.com", "pw").await.unwrap();

    let result = f.service.register("a@b.com", "other").await;

    assert_eq!(result, Err(DomainError::Auth(AuthError::UserAlreadyExists)));
    assert_eq!(f.hasher.hash_calls(), 1);
    assert_eq!(f.repo.len().await, 1);
}

#[tokio::test]
async fn test_login_increments_version_and_embeds_it() {
    let f = fixture();
    f.service.register("a@b.com", "pw").await.unwrap();

    let first = f.service.login("a@b.com", "pw").await.unwrap();
    assert_eq!(f.repo.token_version_of("a@b.com").await, Some(1));
    assert_eq!(f.signer.verify(&first.access_token).unwrap().token_version, 1);

    let second = f.service.login("a@b.com", "pw").await.unwrap();
    assert_eq!(f.repo.token_version_of("a@b.com").await, Some(2));
    let payload = f.signer.verify(&second.access_token).unwrap();
    assert_eq!(payload.token_version, 2);
    assert_eq!(payload.email, "a@b.com");
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_fail_identically() {
    let f = fixture();
    f.service.register("a@b.com", "pw").await.unwrap();

    let unknown = f.service.login("nobody@b.com", "pw").await.unwrap_err();
    let wrong = f.service.login("a@b.com", "nope").await.unwrap_err();

    assert_eq!(unknown, wrong);
    assert_eq!(unknown, DomainError::Auth(AuthError::InvalidCredentials));
    assert_eq!(f.repo.token_version_of("a@b.com").await, Some(0));
}

#[tokio::test]
async fn test_earlier_token_is_revoked_by_later_login() {
    let f = fixture();
    f.service.register("a@b.com", "pw").await.unwrap();

    let first = f.service.login("a@b.com", "pw").await.unwrap();
    let payload = f.service.validate_token(&first.access_token).await.unwrap();
    assert_eq!(payload.token_version, 1);

    let second = f.service.login("a@b.com", "pw").await.unwrap();

    assert_eq!(
        f.service.validate_token(&first.access_token).await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    );
    assert!(f.service.validate_token(&second.access_token).await.is_ok());
}

#[tokio::test]
async fn test_validate_rejects_tampered_token_as_token_error() {
    let f = fixture();
    f.service.register("a@b.com", "pw").await.unwrap();
    let login = f.service.login("a@b.com", "pw").await.unwrap();

    let other = JwtTokenSigner::new(TokenSignerConfig::new("other-secret", 3600));
    let forged = other
        .sign(&f.signer.verify(&login.access_token).unwrap())
        .unwrap();

    assert_eq!(
        f.service.validate_token(&forged).await,
        Err(DomainError::Token(TokenError::InvalidSignature))
    );
}

#[tokio::test]
async fn test_validate_token_for_missing_user() {
    let f = fixture();
    let ghost = crate::domain::entities::user::UserCredentials {
        id: "000000000000000000000099".to_string(),
        email: "ghost@b.com".to_string(),
        password: String::new(),
        token_version: 0,
    };
    let token = f
        .signer
        .sign(&UserJwtPayload::new(&ghost, 0, 60).unwrap())
        .unwrap();

    assert_eq!(
        f.service.validate_token(&token).await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    );
}

#[tokio::test]
async fn test_validate_expired_token() {
    let f = fixture();
    f.service.register("a@b.com", "pw").await.unwrap();
    let user = f.repo.find_by_email("a@b.com").await.unwrap().unwrap();

    let mut payload = UserJwtPayload::new(&user, 0, 60).unwrap();
    payload.exp = Utc::now().timestamp() - 10;
    let token = f.signer.sign(&payload).unwrap();

    assert_eq!(
        f.service.validate_token(&token).await,
        Err(DomainError::Token(TokenError::TokenExpired))
    );
}

#[tokio::test]
async fn test_full_flow_with_bcrypt() {
    let repo = Arc::new(MockUserRepository::new());
    let service = AuthService::new(
        repo.clone(),
        Arc::new(BcryptHasher::new(4)),
        Arc::new(JwtTokenSigner::new(TokenSignerConfig::new("secret", 60))),
    );

    service.register("a@b.com", "pw").await.unwrap();
    let stored = repo.find_by_email("a@b.com").await.unwrap().unwrap();
    assert!(stored.password.starts_with("$2"));

    let token = service.login("a@b.com", "pw").await.unwrap().access_token;
    assert_eq!(service.validate_token(&token).await.unwrap().token_version, 1);
    assert_eq!(
        service.login("a@b.com", "bad").await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    );
}

#[tokio::test]
async fn test_login_with_unrepresentable_lifetime_fails_cleanly() {
    let repo = Arc::new(MockUserRepository::new());
    let signer = Arc::new(JwtTokenSigner::new(TokenSignerConfig::new("test-secret", i64::MAX)));
    let service = AuthService::new(repo.clone(), Arc::new(PlainHasher::default()), signer);
    service.register("a@b.com", "pw").await.unwrap();

    let result = service.login("a@b.com", "pw").await;

    assert_eq!(
        result.map(|_| ()),
        Err(DomainError::Token(TokenError::TokenGenerationFailed))
    );
}

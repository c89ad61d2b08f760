//! Token signer trait and its jsonwebtoken implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::UserJwtPayload;
use crate::errors::{DomainError, TokenError};

use super::config::TokenSignerConfig;

/// Signs and verifies access tokens
pub trait TokenSigner: Send + Sync {
    /// Lifetime given to newly issued tokens
    fn expires_in_seconds(&self) -> i64;

    /// Serialize and sign `payload`
    fn sign(&self, payload: &UserJwtPayload) -> Result<String, DomainError>;

    /// Check signature and expiry of `token` and return its payload
    ///
    /// # Returns
    /// * `Ok(UserJwtPayload)` - Signature valid and token not expired
    /// * `Err(DomainError::Token)` - Expired, tampered or malformed token
    fn verify(&self, token: &str) -> Result<UserJwtPayload, DomainError>;
}

/// HMAC JWT signer
pub struct JwtTokenSigner {
    config: TokenSignerConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenSigner {
    pub fn new(config: TokenSignerConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }
}

impl TokenSigner for JwtTokenSigner {
    fn expires_in_seconds(&self) -> i64 {
        self.config.expires_in_seconds
    }

    fn sign(&self, payload: &UserJwtPayload) -> Result<String, DomainError> {
        encode(&Header::new(self.config.algorithm), payload, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    fn verify(&self, token: &str) -> Result<UserJwtPayload, DomainError> {
        decode::<UserJwtPayload>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let error = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(error)
            })
    }
}

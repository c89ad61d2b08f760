//! Configuration for the token signer

use gavel_shared::JwtConfig;
use jsonwebtoken::Algorithm;

/// Configuration for the token signer
#[derive(Debug, Clone)]
pub struct TokenSignerConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds
    pub expires_in_seconds: i64,
}

impl TokenSignerConfig {
    pub fn new(jwt_secret: impl Into<String>, expires_in_seconds: i64) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            expires_in_seconds,
        }
    }
}

impl From<&JwtConfig> for TokenSignerConfig {
    fn from(config: &JwtConfig) -> Self {
        Self::new(config.secret.clone(), config.expires_in_seconds)
    }
}

//! Authentication configuration: JWT signing and password hashing

use serde::{Deserialize, Serialize};
use std::env;

use super::ConfigError;

/// Environment variable holding the JWT signing secret
pub const JWT_SECRET_NAME: &str = "JWT_SECRET";

/// Environment variable holding the token lifetime
pub const JWT_SECRET_EXPIRATION_NAME: &str = "JWT_EXPIRES_IN";

/// Longest accepted token lifetime (ten years)
pub const MAX_JWT_EXPIRES_IN_SECONDS: i64 = 10 * 365 * 86_400;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token lifetime in seconds
    pub expires_in_seconds: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret and the default lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires_in_seconds: 3600,
        }
    }

    /// Set token lifetime in seconds
    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.expires_in_seconds = seconds;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var(JWT_SECRET_NAME)
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                name: JWT_SECRET_NAME.to_string(),
            })?;

        let mut config = Self::new(secret);
        if let Ok(raw) = env::var(JWT_SECRET_EXPIRATION_NAME) {
            config.expires_in_seconds =
                parse_duration_seconds(&raw).ok_or_else(|| ConfigError::Invalid {
                    name: JWT_SECRET_EXPIRATION_NAME.to_string(),
                    value: raw.clone(),
                })?;
        }
        Ok(config)
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HashingConfig {
    /// bcrypt cost (log2 of the number of rounds)
    pub bcrypt_cost: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl HashingConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var("BCRYPT_COST") {
            Ok(raw) => {
                let cost = raw
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|c| (4..=31).contains(c))
                    .ok_or(ConfigError::Invalid {
                        name: "BCRYPT_COST".to_string(),
                        value: raw,
                    })?;
                Ok(Self { bcrypt_cost: cost })
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Parse a lifetime such as `3600`, `90s`, `15m`, `1h` or `7d` into seconds
///
/// Lifetimes above [`MAX_JWT_EXPIRES_IN_SECONDS`] are rejected.
pub fn parse_duration_seconds(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let (digits, multiplier) = match raw.chars().last()? {
        's' => (&raw[..raw.len() - 1], 1),
        'm' => (&raw[..raw.len() - 1], 60),
        'h' => (&raw[..raw.len() - 1], 3600),
        'd' => (&raw[..raw.len() - 1], 86400),
        c if c.is_ascii_digit() => (raw, 1),
        _ => return None,
    };

    let value = digits.trim().parse::<i64>().ok()?;
    if value <= 0 {
        return None;
    }
    value
        .checked_mul(multiplier)
        .filter(|seconds| *seconds <= MAX_JWT_EXPIRES_IN_SECONDS)
}

//! JWT payload issued to authenticated users.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserCredentials;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserJwtPayload {
    /// Subject (user ID)
    pub sub: String,

    pub email: String,

    /// Snapshot of the user's token version at issuance
    #[serde(rename = "tokenVersion")]
    pub token_version: i64,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl UserJwtPayload {
    /// Creates claims for `user` at `token_version`, valid for `ttl_seconds`
    ///
    /// `None` when the expiry falls outside the representable time range.
    pub fn new(user: &UserCredentials, token_version: i64, ttl_seconds: i64) -> Option<Self> {
        let now = Utc::now();
        let expiry = Duration::try_seconds(ttl_seconds).and_then(|ttl| now.checked_add_signed(ttl))?;

        Some(Self {
            sub: user.id.clone(),
            email: user.email.clone(),
            token_version,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        })
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

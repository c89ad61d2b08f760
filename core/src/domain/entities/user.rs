//! User credentials entity for the authentication service.

use serde::{Deserialize, Serialize};

/// Persisted user credentials
///
/// `token_version` is the revocation counter: every successful login bumps
/// it, and a JWT is only honoured while the version it carries matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    /// Identifier assigned by the persistence layer
    #[serde(rename = "_id")]
    pub id: String,

    /// Unique login email
    pub email: String,

    /// bcrypt hash of the password
    pub password: String,

    #[serde(rename = "tokenVersion")]
    pub token_version: i64,
}

impl UserCredentials {
    /// Checks whether a token issued at `version` is still current
    pub fn accepts_token_version(&self, version: i64) -> bool {
        self.token_version == version
    }
}

/// Credentials about to be stored on registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserCredentials {
    pub email: String,

    /// Already hashed password
    pub password: String,

    #[serde(rename = "tokenVersion")]
    pub token_version: i64,
}

impl NewUserCredentials {
    /// Creates credentials for a fresh account with token version 0
    pub fn new(email: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: hashed_password.into(),
            token_version: 0,
        }
    }
}

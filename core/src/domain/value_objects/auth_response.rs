//! Authentication response value objects for API responses.

use serde::{Deserialize, Serialize};

/// Confirmation returned after a successful registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    pub message: String,
}

impl RegisterResponse {
    pub fn for_email(email: &str) -> Self {
        Self {
            message: format!("User {} registered", email),
        }
    }
}

/// Token issued after a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Signed JWT carrying the post-login token version
    pub access_token: String,
}

impl LoginResponse {
    pub fn new(access_token: String) -> Self {
        Self { access_token }
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use gavel_core::domain::entities::token::UserJwtPayload;

/// Body of `/auth/register` and `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenRequest {
    /// An absent token is rejected like any other invalid one
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenResponse {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub user: UserJwtPayload,
}

//! JWT signing and verification
//!
//! Tokens are HS256-signed [`UserJwtPayload`]s; the signer owns the secret
//! and the token lifetime.
//!
//! [`UserJwtPayload`]: crate::domain::entities::token::UserJwtPayload

mod config;
mod service;


pub use config::TokenSignerConfig;
pub use service::{JwtTokenSigner, TokenSigner};

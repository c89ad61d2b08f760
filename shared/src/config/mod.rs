//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and password hashing
//! - `database` - MongoDB connection settings
//! - `environment` - Environment detection
//! - `server` - HTTP bind address
//! - `services` - Outbound service URLs and the CSV import source
//!
//! Every service binary builds one of the composite configs below with
//! `from_env()` after loading `.env`.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;
pub mod services;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{HashingConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
pub use services::{AuthClientConfig, ImportConfig};

/// Default database for the auction catalog
pub const AUCTION_DATABASE_NAME: &str = "auctiondb";

/// Default database for user credentials
pub const AUTH_DATABASE_NAME: &str = "authdb";

/// Default listening port of auction-api
pub const AUCTION_API_PORT: u16 = 3000;

/// Default listening port of auth-api
pub const AUTH_API_PORT: u16 = 3001;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} not found in config")]
    Missing { name: String },

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: String, value: String },
}

/// Complete configuration of the auction-api service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuctionApiConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth_client: AuthClientConfig,
    pub import: ImportConfig,
}

impl AuctionApiConfig {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(AUCTION_API_PORT)?,
            database: DatabaseConfig::from_env(AUCTION_DATABASE_NAME),
            auth_client: AuthClientConfig::from_env(),
            import: ImportConfig::from_env(),
        })
    }
}

/// Complete configuration of the auth-api service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthApiConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub hashing: HashingConfig,
}

impl AuthApiConfig {
    /// Load configuration from environment
    ///
    /// Fails when `JWT_SECRET` is absent; the service must not start with
    /// a guessable signing key.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(AUTH_API_PORT)?,
            database: DatabaseConfig::from_env(AUTH_DATABASE_NAME),
            jwt: JwtConfig::from_env()?,
            hashing: HashingConfig::from_env()?,
        })
    }
}

//! Shared utilities and common types for the Gavel services
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error response body returned by both APIs
//! - Pagination parameters for list endpoints

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AuctionApiConfig, AuthApiConfig, AuthClientConfig, ConfigError, DatabaseConfig,
    Environment, HashingConfig, ImportConfig, JwtConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::Pagination;

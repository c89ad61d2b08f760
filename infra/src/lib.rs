//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `gavel_core`:
//! - **Database**: MongoDB repositories for auction items and user credentials
//! - **HTTP**: client used by the auction API to reach the auth API

// Re-export core types for convenience
pub use gavel_core::errors::*;

/// Database module - MongoDB connection and repositories
pub mod database;

/// HTTP clients for sibling services
pub mod http;

pub use database::{MongoAuctionRepository, MongoConnection, MongoUserRepository};
pub use http::RemoteAuthClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

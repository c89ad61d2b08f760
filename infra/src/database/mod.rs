//! Database module - MongoDB implementations
//!
//! This module provides:
//! - Client construction and the `ping` health probe
//! - BSON document mappings of the domain entities
//! - Repository implementations for both services

pub mod connection;
pub mod mongo;

// Re-export commonly used types
pub use connection::MongoConnection;
pub use mongo::{MongoAuctionRepository, MongoUserRepository};

/// Collection holding auction listings
pub const AUCTION_COLLECTION_NAME: &str = "auction_items";

/// Collection holding user credentials
pub const AUTH_COLLECTION_NAME: &str = "user_credentials";

//! Database configuration module

use serde::{Deserialize, Serialize};

/// Default MongoDB connection string inside the compose network
pub const DEFAULT_MONGO_URL: &str = "mongodb://mongodb:27017";

/// MongoDB connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// MongoDB connection URL
    pub url: String,

    /// Database to open on the connected client
    pub database_name: String,
}

impl DatabaseConfig {
    /// Create a new database configuration
    pub fn new(url: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database_name: database_name.into(),
        }
    }

    /// Create from environment variables
    ///
    /// `MONGO_URL` selects the server; the database name is fixed per service.
    pub fn from_env(database_name: &str) -> Self {
        let url = std::env::var("MONGO_URL").unwrap_or_else(|_| DEFAULT_MONGO_URL.to_string());
        Self::new(url, database_name)
    }

    /// Check if this is a local database
    pub fn is_local(&self) -> bool {
        self.url.contains("localhost") || self.url.contains("127.0.0.1")
    }
}

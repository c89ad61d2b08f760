//! Outbound service and import source configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default auth-api location inside the compose network
pub const DEFAULT_AUTH_API_URL: &str = "http://auth-api:3001";

/// Default bound on a single auth-api request, in seconds
pub const DEFAULT_AUTH_API_TIMEOUT_SECS: u64 = 5;

/// Default location of the bundled auction listings
pub const DEFAULT_CSV_IMPORT_PATH: &str = "files/auction_data.csv";

/// Where auction-api reaches auth-api for token validation and health
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthClientConfig {
    pub base_url: String,

    /// Whole-request timeout, connect through body
    pub timeout_secs: u64,
}

impl AuthClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_AUTH_API_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Load from environment; an unparseable or zero timeout falls back to
    /// the default
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("AUTH_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_AUTH_API_TIMEOUT_SECS);

        Self::new(std::env::var("AUTH_API_URL").unwrap_or_else(|_| DEFAULT_AUTH_API_URL.to_string()))
            .with_timeout_secs(timeout_secs)
    }

    pub fn validate_url(&self) -> String {
        format!("{}/auth/validate", self.base_url)
    }

    pub fn monitor_url(&self) -> String {
        format!("{}/monitor", self.base_url)
    }
}

/// CSV file imported when the import request carries no body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportConfig {
    pub csv_path: PathBuf,
}

impl ImportConfig {
    pub fn from_env() -> Self {
        let csv_path = std::env::var("CSV_IMPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CSV_IMPORT_PATH));
        Self { csv_path }
    }
}

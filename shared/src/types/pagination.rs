//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Default number of items returned by a list query
pub const DEFAULT_LIMIT: u32 = 10;

/// Offset-based pagination parameters (`limit` / `skip`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of items to return
    pub limit: u32,

    /// Number of items to skip from the start of the collection
    pub skip: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: 0,
        }
    }
}

impl Pagination {
    /// Create a new pagination with custom values
    pub fn new(limit: u32, skip: u64) -> Self {
        Self { limit, skip }
    }

    /// Parse raw query-string values
    ///
    /// Absent values take the defaults; present values must be non-negative
    /// integers.
    pub fn parse(limit: Option<&str>, skip: Option<&str>) -> Result<Self, String> {
        let defaults = Self::default();
        let limit = match limit {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid limit: {}", raw))?,
            None => defaults.limit,
        };
        let skip = match skip {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid skip: {}", raw))?,
            None => defaults.skip,
        };
        Ok(Self { limit, skip })
    }
}

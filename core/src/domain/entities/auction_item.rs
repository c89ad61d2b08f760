//! Auction item entity representing a listing in the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of an auction listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionItemStatus {
    /// Listed but bidding has not started
    Upcoming,
    /// Bidding is open
    Ongoing,
    /// Bidding has closed
    Completed,
}

impl AuctionItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionItemStatus::Upcoming => "upcoming",
            AuctionItemStatus::Ongoing => "ongoing",
            AuctionItemStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AuctionItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuctionItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Ok(AuctionItemStatus::Upcoming),
            "ongoing" => Ok(AuctionItemStatus::Ongoing),
            "completed" => Ok(AuctionItemStatus::Completed),
            _ => Err(format!("Invalid auction item status: {}", s)),
        }
    }
}

/// Auction item entity
///
/// `status` is kept as the raw string: bulk imports store whatever the
/// source file carried, while the create endpoint restricts it to
/// [`AuctionItemStatus`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionItem {
    /// Identifier assigned by the persistence layer, absent until stored
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    pub description: String,

    pub category: String,

    pub status: String,

    /// Estimated value in the listing currency
    pub estimated_value: f64,

    pub created_at: DateTime<Utc>,
}

impl AuctionItem {
    /// Creates a new unsaved auction item
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        status: impl Into<String>,
        estimated_value: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            status: status.into(),
            estimated_value,
            created_at,
        }
    }

    /// Returns a copy carrying the identifier assigned on insert
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Parses the stored status, if it is one of the known values
    pub fn known_status(&self) -> Option<AuctionItemStatus> {
        self.status.parse().ok()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use gavel_core::domain::entities::auction_item::AuctionItemStatus;
use gavel_core::services::NewAuctionItem;

/// Raw `limit` / `skip` query values, parsed by the handler so a bad value
/// gets the catalog's own error message
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListItemsQuery {
    pub limit: Option<String>,
    pub skip: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchItemsQuery {
    /// Missing `q` searches for the empty string, which matches every item
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAuctionItemRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    /// One of `upcoming`, `ongoing`, `completed`
    pub status: AuctionItemStatus,

    #[validate(range(min = 0.0))]
    pub estimated_value: f64,

    /// Defaults to the time of the request
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CreateAuctionItemRequest> for NewAuctionItem {
    fn from(request: CreateAuctionItemRequest) -> Self {
        NewAuctionItem {
            title: request.title,
            description: request.description,
            category: request.category,
            status: request.status,
            estimated_value: request.estimated_value,
            created_at: request.created_at,
        }
    }
}

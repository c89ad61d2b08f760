//! Catalog use cases over an [`AuctionRepository`]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use gavel_shared::Pagination;

use crate::domain::entities::auction_item::{AuctionItem, AuctionItemStatus};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AuctionRepository;

/// Input for creating a single auction item
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuctionItem {
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: AuctionItemStatus,
    pub estimated_value: f64,
    /// Defaults to the current time when absent
    pub created_at: Option<DateTime<Utc>>,
}

/// Auction catalog service
pub struct AuctionService<A: AuctionRepository> {
    repository: Arc<A>,
}

impl<A: AuctionRepository> AuctionService<A> {
    pub fn new(repository: Arc<A>) -> Self {
        Self { repository }
    }

    /// List one page of items
    pub async fn find_all(&self, pagination: Pagination) -> DomainResult<Vec<AuctionItem>> {
        self.repository.find_all(pagination).await
    }

    /// Fetch a single item
    ///
    /// # Returns
    /// * `Ok(AuctionItem)` - Item found
    /// * `Err(DomainError::NotFound)` - No item has this id, or the id is malformed
    pub async fn find_by_id(&self, id: &str) -> DomainResult<AuctionItem> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Item with id: {} was not found.", id),
            })
    }

    /// Validate and store a new item
    pub async fn create(&self, input: NewAuctionItem) -> DomainResult<AuctionItem> {
        for (field, value) in [
            ("title", &input.title),
            ("description", &input.description),
            ("category", &input.category),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::Validation {
                    message: format!("{} should not be empty", field),
                });
            }
        }
        if !input.estimated_value.is_finite() || input.estimated_value < 0.0 {
            return Err(DomainError::Validation {
                message: "estimated_value must be a non-negative number".to_string(),
            });
        }

        let item = AuctionItem::new(
            input.title.trim(),
            input.description.trim(),
            input.category.trim(),
            input.status.as_str(),
            input.estimated_value,
            input.created_at.unwrap_or_else(Utc::now),
        );

        let created = self.repository.create(item).await?;
        tracing::debug!(id = ?created.id, "Auction item created");
        Ok(created)
    }

    /// Case-insensitive substring search over title and description
    pub async fn search(&self, query: &str) -> DomainResult<Vec<AuctionItem>> {
        self.repository.search(query).await
    }
}

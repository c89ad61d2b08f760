//! Auction item repository trait.

use async_trait::async_trait;
use gavel_shared::Pagination;

use crate::domain::entities::auction_item::AuctionItem;
use crate::errors::DomainError;

/// Repository trait for auction item persistence operations
///
/// Implementations assign the item identifier on insert; callers pass
/// items with `id: None`.
#[async_trait]
pub trait AuctionRepository: Send + Sync {
    /// Find an item by its identifier
    ///
    /// An identifier the store cannot parse is reported as `Ok(None)`.
    async fn find_by_id(&self, id: &str) -> Result<Option<AuctionItem>, DomainError>;

    /// List items in storage order
    async fn find_all(&self, pagination: Pagination) -> Result<Vec<AuctionItem>, DomainError>;

    /// Insert one item and return it with its new identifier
    async fn create(&self, item: AuctionItem) -> Result<AuctionItem, DomainError>;

    /// Case-insensitive substring search over title and description
    async fn search(&self, query: &str) -> Result<Vec<AuctionItem>, DomainError>;

    /// Bulk insert in one round trip
    ///
    /// Fails when the write is not acknowledged. A partial insert (fewer
    /// documents stored than submitted) is logged as a warning, not an error.
    async fn insert_many(&self, items: Vec<AuctionItem>) -> Result<(), DomainError>;

    /// Liveness probe for the backing store; never fails, returns `false`
    /// on any underlying error
    async fn is_healthy(&self) -> bool;
}

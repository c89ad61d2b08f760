//! In-memory implementation of AuctionRepository for tests and local runs

use async_trait::async_trait;
use gavel_shared::Pagination;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::auction_item::AuctionItem;
use crate::errors::{DomainError, PersistenceError};

use super::AuctionRepository;

/// Mock auction repository backed by a vector in insertion order
pub struct MockAuctionRepository {
    items: Arc<RwLock<Vec<AuctionItem>>>,
    next_id: AtomicU64,
    insert_many_calls: AtomicUsize,
    last_batch: RwLock<Vec<AuctionItem>>,
    healthy: AtomicBool,
    reject_writes: AtomicBool,
}

impl MockAuctionRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicU64::new(1),
            insert_many_calls: AtomicUsize::new(0),
            last_batch: RwLock::new(Vec::new()),
            healthy: AtomicBool::new(true),
            reject_writes: AtomicBool::new(false),
        }
    }

    /// Create a mock repository pre-populated with `items`
    pub async fn with_items(items: Vec<AuctionItem>) -> Self {
        let repo = Self::new();
        {
            let mut stored = repo.items.write().await;
            for item in items {
                let item = repo.assign_id(item);
                stored.push(item);
            }
        }
        repo
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    /// Make every write come back unacknowledged
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Number of `insert_many` calls seen so far, including rejected ones
    pub fn insert_many_calls(&self) -> usize {
        self.insert_many_calls.load(Ordering::SeqCst)
    }

    /// Items passed to the most recent `insert_many` call
    pub async fn last_batch(&self) -> Vec<AuctionItem> {
        self.last_batch.read().await.clone()
    }

    /// Snapshot of every stored item
    pub async fn all(&self) -> Vec<AuctionItem> {
        self.items.read().await.clone()
    }

    fn assign_id(&self, item: AuctionItem) -> AuctionItem {
        let id = format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst));
        item.with_id(id)
    }

    fn check_writable(&self, operation: &str) -> Result<(), DomainError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::NotAcknowledged {
                operation: operation.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for MockAuctionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuctionRepository for MockAuctionRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<AuctionItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.id.as_deref() == Some(id)).cloned())
    }

    async fn find_all(&self, pagination: Pagination) -> Result<Vec<AuctionItem>, DomainError> {
        let items = self.items.read().await;
        let skip = usize::try_from(pagination.skip).unwrap_or(usize::MAX);
        let page = items.iter().skip(skip).cloned();

        // A limit of zero means "no limit", as in MongoDB
        if pagination.limit == 0 {
            return Ok(page.collect());
        }
        Ok(page.take(pagination.limit as usize).collect())
    }

    async fn create(&self, item: AuctionItem) -> Result<AuctionItem, DomainError> {
        self.check_writable("Creating auction item")?;

        let item = self.assign_id(item);
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn search(&self, query: &str) -> Result<Vec<AuctionItem>, DomainError> {
        let needle = query.to_lowercase();
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|i| {
                i.title.to_lowercase().contains(&needle)
                    || i.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn insert_many(&self, items: Vec<AuctionItem>) -> Result<(), DomainError> {
        self.insert_many_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_batch.write().await = items.clone();
        self.check_writable("Bulk insert of auction items")?;

        let mut stored = self.items.write().await;
        for item in items {
            let item = self.assign_id(item);
            stored.push(item);
        }
        Ok(())
    }

    async fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}

//! Tests for the in-memory auction repository

use chrono::Utc;
use gavel_shared::Pagination;

use crate::domain::entities::auction_item::AuctionItem;
use crate::errors::{DomainError, PersistenceError};
use crate::repositories::{AuctionRepository, MockAuctionRepository};

fn item(title: &str, description: &str) -> AuctionItem {
    AuctionItem::new(title, description, "Art", "upcoming", 100.0, Utc::now())
}

async fn seeded(count: usize) -> MockAuctionRepository {
    let items = (0..count)
        .map(|n| item(&format!("Lot {}", n), "A numbered lot"))
        .collect();
    MockAuctionRepository::with_items(items).await
}

#[tokio::test]
async fn test_create_assigns_id() {
    let repo = MockAuctionRepository::new();
    let created = repo.create(item("Vase", "Ming")).await.unwrap();

    let id = created.id.clone().unwrap();
    assert_eq!(id.len(), 24);
    assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn test_find_by_unknown_id_is_none() {
    let repo = seeded(2).await;
    assert_eq!(repo.find_by_id("not-an-id").await.unwrap(), None);
}

#[tokio::test]
async fn test_find_all_applies_skip_and_limit() {
    let repo = seeded(15).await;

    let first = repo.find_all(Pagination::default()).await.unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].title, "Lot 0");

    let second = repo.find_all(Pagination::new(10, 10)).await.unwrap();
    assert_eq!(second.len(), 5);
    assert_eq!(second[0].title, "Lot 10");

    let past_end = repo.find_all(Pagination::new(10, 100)).await.unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_search_is_case_insensitive_over_title_and_description() {
    let repo = MockAuctionRepository::with_items(vec![
        item("Antique Clock", "Brass"),
        item("Painting", "An antique oil on canvas"),
        item("Chair", "Modern"),
    ])
    .await;

    let found = repo.search("ANTIQUE").await.unwrap();
    let titles: Vec<_> = found.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Antique Clock", "Painting"]);
}

#[tokio::test]
async fn test_insert_many_records_batch() {
    let repo = MockAuctionRepository::new();
    repo.insert_many(vec![item("A", "a"), item("B", "b")])
        .await
        .unwrap();

    assert_eq!(repo.insert_many_calls(), 1);
    assert_eq!(repo.last_batch().await.len(), 2);
    assert_eq!(repo.all().await.len(), 2);
}

#[tokio::test]
async fn test_rejected_insert_many_stores_nothing() {
    let repo = MockAuctionRepository::new();
    repo.set_reject_writes(true);

    let result = repo.insert_many(vec![item("A", "a")]).await;

    assert!(matches!(
        result,
        Err(DomainError::Persistence(PersistenceError::NotAcknowledged { .. }))
    ));
    assert_eq!(repo.insert_many_calls(), 1);
    assert!(repo.all().await.is_empty());
}

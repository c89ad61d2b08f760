use std::sync::Arc;

use chrono::{TimeZone, Utc};
use gavel_shared::Pagination;

use super::{AuctionService, NewAuctionItem};
use crate::domain::entities::auction_item::{AuctionItem, AuctionItemStatus};
use crate::errors::DomainError;
use crate::repositories::MockAuctionRepository;

fn input() -> NewAuctionItem {
    NewAuctionItem {
        title: "Lamp".to_string(),
        description: "Old lamp".to_string(),
        category: "Decor".to_string(),
        status: AuctionItemStatus::Upcoming,
        estimated_value: 40.0,
        created_at: None,
    }
}

#[tokio::test]
async fn test_create_then_find_by_id() {
    let service = AuctionService::new(Arc::new(MockAuctionRepository::new()));

    let created = service.create(input()).await.unwrap();
    assert_eq!(created.status, "upcoming");

    let found = service.find_by_id(created.id.as_deref().unwrap()).await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_create_keeps_supplied_timestamp() {
    let service = AuctionService::new(Arc::new(MockAuctionRepository::new()));
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    let created = service
        .create(NewAuctionItem {
            created_at: Some(at),
            ..input()
        })
        .await
        .unwrap();

    assert_eq!(created.created_at, at);
}

#[tokio::test]
async fn test_create_rejects_blank_title_and_negative_value() {
    let repo = Arc::new(MockAuctionRepository::new());
    let service = AuctionService::new(repo.clone());

    let blank = service
        .create(NewAuctionItem {
            title: "  ".to_string(),
            ..input()
        })
        .await;
    assert!(matches!(blank, Err(DomainError::Validation { .. })));

    let negative = service
        .create(NewAuctionItem {
            estimated_value: -1.0,
            ..input()
        })
        .await;
    assert!(matches!(negative, Err(DomainError::Validation { .. })));

    assert!(repo.all().await.is_empty());
}

#[tokio::test]
async fn test_missing_item_message() {
    let service = AuctionService::new(Arc::new(MockAuctionRepository::new()));

    let err = service.find_by_id("abc").await.unwrap_err();
    assert_eq!(
        err,
        DomainError::NotFound {
            resource: "Item with id: abc was not found.".to_string()
        }
    );
}

#[tokio::test]
async fn test_find_all_and_search_delegate() {
    let items = vec![
        AuctionItem::new("Clock", "Brass", "Decor", "ongoing", 5.0, Utc::now()),
        AuctionItem::new("Chair", "Oak", "Furniture", "completed", 7.0, Utc::now()),
    ];
    let service = AuctionService::new(Arc::new(MockAuctionRepository::with_items(items).await));

    assert_eq!(service.find_all(Pagination::new(1, 1)).await.unwrap()[0].title, "Chair");
    assert_eq!(service.search("brass").await.unwrap().len(), 1);
}

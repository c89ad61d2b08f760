//! Integration tests for the auction API routes

use actix_web::{http::header, http::StatusCode, test, web};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;

use gavel_api::app::create_auction_app;
use gavel_api::routes::AuctionAppState;
use gavel_core::domain::entities::auction_item::AuctionItem;
use gavel_core::errors::DomainError;
use gavel_core::repositories::MockAuctionRepository;
use gavel_core::services::{AuthServiceHealth, TokenValidator};
use gavel_shared::{Environment, ImportConfig};

/// Accepts exactly one token
struct StaticValidator {
    accepted: &'static str,
}

#[async_trait]
impl TokenValidator for StaticValidator {
    async fn validate_token(&self, token: &str) -> Result<bool, DomainError> {
        Ok(token == self.accepted)
    }
}

struct StaticAuthHealth(bool);

#[async_trait]
impl AuthServiceHealth for StaticAuthHealth {
    async fn is_healthy(&self) -> bool {
        self.0
    }
}

const GOOD_TOKEN: &str = "good-token";

fn item(title: &str, description: &str) -> AuctionItem {
    AuctionItem::new(title, description, "Art", "upcoming", 100.0, Utc::now())
}

async fn seeded_repo() -> Arc<MockAuctionRepository> {
    Arc::new(
        MockAuctionRepository::with_items(vec![
            item("Oil Painting", "Landscape in oil"),
            item("Bronze Statue", "Small bronze figure"),
            item("Pocket Watch", "Silver, keeps time"),
        ])
        .await,
    )
}

fn state(
    repo: Arc<MockAuctionRepository>,
    auth_up: bool,
    csv_path: &str,
) -> web::Data<AuctionAppState<MockAuctionRepository>> {
    web::Data::new(AuctionAppState::new(
        repo,
        Arc::new(StaticAuthHealth(auth_up)),
        ImportConfig {
            csv_path: PathBuf::from(csv_path),
        },
    ))
}

fn validator() -> Arc<dyn TokenValidator> {
    Arc::new(StaticValidator {
        accepted: GOOD_TOKEN,
    })
}

#[actix_web::test]
async fn test_list_items_defaults_and_paging() {
    let app = test::init_service(create_auction_app(
        state(seeded_repo().await, true, "missing.csv"),
        validator(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::get().uri("/auction/items").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/auction/items?limit=1&skip=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Bronze Statue");
}

#[actix_web::test]
async fn test_list_items_rejects_non_numeric_paging() {
    let app = test::init_service(create_auction_app(
        state(seeded_repo().await, true, "missing.csv"),
        validator(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::get()
        .uri("/auction/items?limit=ten")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "limit and skip should be of type number");
}

#[actix_web::test]
async fn test_create_item() {
    let repo = Arc::new(MockAuctionRepository::new());
    let app = test::init_service(create_auction_app(
        state(repo.clone(), true, "missing.csv"),
        validator(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/auction/items/new")
        .set_json(json!({
            "title": "Vase",
            "description": "Ming-style porcelain",
            "category": "Ceramics",
            "status": "ongoing",
            "estimated_value": 2500.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Vase");
    assert_eq!(body["status"], "ongoing");
    assert!(body["_id"].is_string());

    assert_eq!(repo.all().await.len(), 1);
}

#[actix_web::test]
async fn test_create_item_rejects_bad_input() {
    let repo = Arc::new(MockAuctionRepository::new());
    let app = test::init_service(create_auction_app(
        state(repo.clone(), true, "missing.csv"),
        validator(),
        Environment::Development,
    ))
    .await;

    for body in [
        json!({
            "title": "Vase", "description": "d", "category": "c",
            "status": "sold", "estimated_value": 1.0
        }),
        json!({
            "title": "Vase", "description": "d", "category": "c",
            "status": "upcoming", "estimated_value": -1.0
        }),
    ] {
        let req = test::TestRequest::post()
            .uri("/auction/items/new")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    assert!(repo.all().await.is_empty());
}

#[actix_web::test]
async fn test_search_items() {
    let app = test::init_service(create_auction_app(
        state(seeded_repo().await, true, "missing.csv"),
        validator(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::get()
        .uri("/auction/items/search?q=BRONZE")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Bronze Statue");

    // Matches on description too
    let req = test::TestRequest::get()
        .uri("/auction/items/search?q=keeps")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap()[0]["title"], "Pocket Watch");
}

#[actix_web::test]
async fn test_get_item_by_id() {
    let repo = seeded_repo().await;
    let id = repo.all().await[0].id.clone().unwrap();
    let app = test::init_service(create_auction_app(
        state(repo, true, "missing.csv"),
        validator(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/auction/items/{}", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["title"], "Oil Painting");

    let missing = "ffffffffffffffffffffffff";
    let req = test::TestRequest::get()
        .uri(&format!("/auction/items/{}", missing))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        format!("Item with id: {} was not found.", missing)
    );
}

#[actix_web::test]
async fn test_import_requires_bearer_token() {
    let repo = Arc::new(MockAuctionRepository::new());
    let app = test::init_service(create_auction_app(
        state(repo.clone(), true, "missing.csv"),
        validator(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/auction/import/csv")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Missing or invalid Authorization header");

    let req = test::TestRequest::post()
        .uri("/auction/import/csv")
        .insert_header((header::AUTHORIZATION, "Bearer stale-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token");

    assert_eq!(repo.insert_many_calls(), 0);
}

#[actix_web::test]
async fn test_import_request_body() {
    let repo = Arc::new(MockAuctionRepository::new());
    let app = test::init_service(create_auction_app(
        state(repo.clone(), true, "missing.csv"),
        validator(),
        Environment::Development,
    ))
    .await;

    let csv = "title,description,category,price,status\n\
               Lamp,Brass desk lamp,Decor,40,upcoming\n\
               Rug,,Decor,90,upcoming\n\
               Clock,Wall clock,Decor,abc,ongoing\n";
    let req = test::TestRequest::post()
        .uri("/auction/import/csv")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", GOOD_TOKEN)))
        .set_payload(csv)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Data import complete");
    assert_eq!(body["importedCount"], 1);
    assert_eq!(body["skippedCount"], 2);

    let stored = repo.all().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Lamp");
    assert_eq!(stored[0].estimated_value, 40.0);
}

#[actix_web::test]
async fn test_import_missing_file_reports_failure() {
    let repo = Arc::new(MockAuctionRepository::new());
    let app = test::init_service(create_auction_app(
        state(repo.clone(), true, "/nonexistent/gavel/items.csv"),
        validator(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/auction/import/csv")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", GOOD_TOKEN)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["importedCount"], 0);
    assert_ne!(body["message"], "Data import complete");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("/nonexistent/gavel/items.csv"));

    assert_eq!(repo.insert_many_calls(), 0);
}

#[actix_web::test]
async fn test_monitor_reports_components() {
    let repo = Arc::new(MockAuctionRepository::new());
    let app = test::init_service(create_auction_app(
        state(repo.clone(), false, "missing.csv"),
        validator(),
        Environment::Development,
    ))
    .await;

    let req = test::TestRequest::get().uri("/auction/monitor").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "status": "ok", "details": { "db": "up", "auth": "down" } })
    );

    repo.set_healthy(false);
    let req = test::TestRequest::get().uri("/auction/monitor").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["details"]["db"], "down");
}

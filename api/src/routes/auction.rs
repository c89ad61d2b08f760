//! Catalog routes under `/auction/items`

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use gavel_core::repositories::AuctionRepository;
use gavel_core::services::{AuctionHealthService, AuctionService, AuthServiceHealth, CsvImportService};
use gavel_shared::{error_codes, ErrorResponse, ImportConfig, Pagination};

use crate::dto::{CreateAuctionItemRequest, ListItemsQuery, SearchItemsQuery};
use crate::handlers::{handle_domain_error, validation_error_response};

pub const INVALID_PAGINATION_MESSAGE: &str = "limit and skip should be of type number";

/// Application state of the auction API
pub struct AuctionAppState<A: AuctionRepository> {
    pub auction_service: Arc<AuctionService<A>>,
    pub import_service: Arc<CsvImportService<A>>,
    pub health_service: Arc<AuctionHealthService<A>>,
    pub import_config: ImportConfig,
}

impl<A: AuctionRepository> AuctionAppState<A> {
    /// Wire every service of the auction API over one repository
    pub fn new(
        repository: Arc<A>,
        auth_health: Arc<dyn AuthServiceHealth>,
        import_config: ImportConfig,
    ) -> Self {
        Self {
            auction_service: Arc::new(AuctionService::new(repository.clone())),
            import_service: Arc::new(CsvImportService::new(repository.clone())),
            health_service: Arc::new(AuctionHealthService::new(repository, auth_health)),
            import_config,
        }
    }
}

/// Handler for GET /auction/items
pub async fn list_items<A>(
    state: web::Data<AuctionAppState<A>>,
    query: web::Query<ListItemsQuery>,
) -> HttpResponse
where
    A: AuctionRepository + 'static,
{
    let pagination = match Pagination::parse(query.limit.as_deref(), query.skip.as_deref()) {
        Ok(pagination) => pagination,
        Err(reason) => {
            log::debug!("Rejected pagination: {}", reason);
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                error_codes::BAD_REQUEST,
                INVALID_PAGINATION_MESSAGE,
            ));
        }
    };

    match state.auction_service.find_all(pagination).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /auction/items/new
pub async fn create_item<A>(
    state: web::Data<AuctionAppState<A>>,
    request: web::Json<CreateAuctionItemRequest>,
) -> HttpResponse
where
    A: AuctionRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state.auction_service.create(request.into_inner().into()).await {
        Ok(item) => HttpResponse::Created().json(item),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /auction/items/search
pub async fn search_items<A>(
    state: web::Data<AuctionAppState<A>>,
    query: web::Query<SearchItemsQuery>,
) -> HttpResponse
where
    A: AuctionRepository + 'static,
{
    match state.auction_service.search(&query.q).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /auction/items/{id}
pub async fn get_item<A>(
    state: web::Data<AuctionAppState<A>>,
    path: web::Path<String>,
) -> HttpResponse
where
    A: AuctionRepository + 'static,
{
    match state.auction_service.find_by_id(&path.into_inner()).await {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => handle_domain_error(e),
    }
}

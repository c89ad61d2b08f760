//! Application factories
//!
//! One factory per service; both binaries and the integration tests build
//! their apps here.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};
use std::sync::Arc;

use gavel_core::repositories::{AuctionRepository, UserRepository};
use gavel_core::services::{PasswordHasher, TokenSigner, TokenValidator};
use gavel_shared::{error_codes, Environment, ErrorResponse};

use crate::handlers::json_error_handler;
use crate::middleware::{cors::create_cors, BearerAuth};
use crate::routes::auction::{create_item, get_item, list_items, search_items};
use crate::routes::auth::{login, register, validate};
use crate::routes::import::import_csv;
use crate::routes::monitor::{auction_monitor, auth_monitor};
use crate::routes::{AuctionAppState, AuthAppState};

/// Create the auction API application
///
/// `token_validator` backs the guard on the import route.
pub fn create_auction_app<A>(
    app_state: web::Data<AuctionAppState<A>>,
    token_validator: Arc<dyn TokenValidator>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    A: AuctionRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        .wrap(create_cors(environment))
        .service(
            web::scope("/auction")
                .route("/monitor", web::get().to(auction_monitor::<A>))
                .service(
                    web::scope("/items")
                        .route("", web::get().to(list_items::<A>))
                        .route("/", web::get().to(list_items::<A>))
                        .route("/new", web::post().to(create_item::<A>))
                        .route("/search", web::get().to(search_items::<A>))
                        .route("/{id}", web::get().to(get_item::<A>)),
                )
                .service(
                    web::scope("/import")
                        .wrap(BearerAuth::new(token_validator))
                        .route("/csv", web::post().to(import_csv::<A>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Create the auth API application
pub fn create_auth_app<U, H, T>(
    app_state: web::Data<AuthAppState<U, H, T>>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenSigner + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        .wrap(create_cors(environment))
        .route("/monitor", web::get().to(auth_monitor::<U, H, T>))
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(register::<U, H, T>))
                .route("/login", web::post().to(login::<U, H, T>))
                .route("/validate", web::post().to(validate::<U, H, T>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}

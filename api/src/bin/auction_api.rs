//! Auction catalog service

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;
use std::sync::Arc;

use gavel_api::app::create_auction_app;
use gavel_api::routes::AuctionAppState;
use gavel_core::services::TokenValidator;
use gavel_infra::{MongoAuctionRepository, MongoConnection, RemoteAuthClient};
use gavel_shared::AuctionApiConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AuctionApiConfig::from_env()?;
    info!("Starting auction API ({})", config.environment);

    let connection = MongoConnection::connect(&config.database)
        .await
        .with_context(|| format!("Failed to connect to MongoDB at {}", config.database.url))?;

    let repository = Arc::new(MongoAuctionRepository::new(connection.database()));
    let auth_client = Arc::new(RemoteAuthClient::new(config.auth_client.clone())?);
    info!("Validating tokens against {}", auth_client.base_url());

    let app_state = web::Data::new(AuctionAppState::new(
        repository,
        auth_client.clone(),
        config.import.clone(),
    ));
    let token_validator: Arc<dyn TokenValidator> = auth_client;
    let environment = config.environment;

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        create_auction_app(app_state.clone(), token_validator.clone(), environment)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}

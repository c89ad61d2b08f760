//! Authentication service

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};
use std::sync::Arc;

use gavel_api::app::create_auth_app;
use gavel_api::routes::AuthAppState;
use gavel_core::services::{BcryptHasher, JwtTokenSigner, TokenSignerConfig};
use gavel_infra::{MongoConnection, MongoUserRepository};
use gavel_shared::AuthApiConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AuthApiConfig::from_env()?;
    info!("Starting auth API ({})", config.environment);

    let connection = MongoConnection::connect(&config.database)
        .await
        .with_context(|| format!("Failed to connect to MongoDB at {}", config.database.url))?;

    let repository = Arc::new(MongoUserRepository::new(connection.database()));
    if let Err(e) = repository.ensure_indexes().await {
        warn!("Could not create the unique email index: {}", e);
    }

    let hasher = Arc::new(BcryptHasher::from_config(&config.hashing));
    let signer = Arc::new(JwtTokenSigner::new(TokenSignerConfig::from(&config.jwt)));
    let app_state = web::Data::new(AuthAppState::new(repository, hasher, signer));
    let environment = config.environment;

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_auth_app(app_state.clone(), environment))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}

//! Health check routes

use actix_web::{web, HttpResponse};

use gavel_core::repositories::{AuctionRepository, UserRepository};
use gavel_core::services::{PasswordHasher, TokenSigner};

use crate::dto::{AuctionMonitorResponse, AuthMonitorResponse};
use crate::routes::{AuctionAppState, AuthAppState};

/// Handler for GET /auction/monitor
pub async fn auction_monitor<A>(state: web::Data<AuctionAppState<A>>) -> HttpResponse
where
    A: AuctionRepository + 'static,
{
    let health = state.health_service.check().await;
    HttpResponse::Ok().json(AuctionMonitorResponse::from(health))
}

/// Handler for GET /monitor of the auth API
pub async fn auth_monitor<U, H, T>(state: web::Data<AuthAppState<U, H, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenSigner + 'static,
{
    let health = state.health_service.check().await;
    HttpResponse::Ok().json(AuthMonitorResponse::from(health))
}

//! Health checks

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::repositories::{AuctionRepository, UserRepository};
use crate::services::transport::AuthServiceHealth;

/// Up/down state of a single dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Up,
    Down,
}

impl From<bool> for ComponentStatus {
    fn from(healthy: bool) -> Self {
        if healthy {
            ComponentStatus::Up
        } else {
            ComponentStatus::Down
        }
    }
}

/// Health of the auction API and its dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionHealth {
    pub db: ComponentStatus,
    pub auth: ComponentStatus,
}

impl AuctionHealth {
    /// Overall status only tracks the database
    pub fn is_ok(&self) -> bool {
        self.db == ComponentStatus::Up
    }
}

/// Health of the auth API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthHealth {
    pub db: ComponentStatus,
}

impl AuthHealth {
    pub fn is_ok(&self) -> bool {
        self.db == ComponentStatus::Up
    }
}

/// Health probes of the auction API
pub struct AuctionHealthService<A: AuctionRepository> {
    repository: Arc<A>,
    auth_service: Arc<dyn AuthServiceHealth>,
}

impl<A: AuctionRepository> AuctionHealthService<A> {
    pub fn new(repository: Arc<A>, auth_service: Arc<dyn AuthServiceHealth>) -> Self {
        Self {
            repository,
            auth_service,
        }
    }

    /// Probe the database and the auth service concurrently
    pub async fn check(&self) -> AuctionHealth {
        let (db, auth) = tokio::join!(self.repository.is_healthy(), self.auth_service.is_healthy());
        let health = AuctionHealth {
            db: db.into(),
            auth: auth.into(),
        };
        if !health.is_ok() {
            tracing::warn!(?health, "Auction API health check failed");
        }
        health
    }
}

/// Health probe of the auth API
pub struct AuthHealthService<U: UserRepository> {
    repository: Arc<U>,
}

impl<U: UserRepository> AuthHealthService<U> {
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    pub async fn check(&self) -> AuthHealth {
        let health = AuthHealth {
            db: self.repository.is_healthy().await.into(),
        };
        if !health.is_ok() {
            tracing::warn!(?health, "Auth API health check failed");
        }
        health
    }
}

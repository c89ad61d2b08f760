use serde::{Deserialize, Serialize};

use gavel_core::services::{AuctionHealth, AuthHealth, ComponentStatus};

fn overall(ok: bool) -> String {
    if ok { "ok" } else { "fail" }.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionMonitorDetails {
    pub db: ComponentStatus,
    pub auth: ComponentStatus,
}

/// `GET /auction/monitor` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionMonitorResponse {
    pub status: String,
    pub details: AuctionMonitorDetails,
}

impl From<AuctionHealth> for AuctionMonitorResponse {
    fn from(health: AuctionHealth) -> Self {
        Self {
            status: overall(health.is_ok()),
            details: AuctionMonitorDetails {
                db: health.db,
                auth: health.auth,
            },
        }
    }
}

/// `GET /monitor` body of the auth API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthMonitorResponse {
    pub status: String,
}

impl From<AuthHealth> for AuthMonitorResponse {
    fn from(health: AuthHealth) -> Self {
        Self {
            status: overall(health.is_ok()),
        }
    }
}

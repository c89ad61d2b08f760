//! Request and response bodies of both APIs

pub mod auction;
pub mod auth;
pub mod import;
pub mod monitor;

pub use auction::{CreateAuctionItemRequest, ListItemsQuery, SearchItemsQuery};
pub use auth::{CredentialsRequest, ValidateTokenRequest, ValidateTokenResponse};
pub use import::ImportResponse;
pub use monitor::{AuctionMonitorDetails, AuctionMonitorResponse, AuthMonitorResponse};

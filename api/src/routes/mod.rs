//! Route handlers and the shared state they read

pub mod auction;
pub mod auth;
pub mod import;
pub mod monitor;

pub use auction::AuctionAppState;
pub use auth::AuthAppState;

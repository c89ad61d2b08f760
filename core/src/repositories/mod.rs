pub mod auction;
pub mod user;

pub use auction::{AuctionRepository, MockAuctionRepository};
pub use user::{MockUserRepository, UserRepository};

//! MongoDB repository implementations

mod auction_repository;
mod documents;
mod errors;
mod user_repository;

pub use auction_repository::MongoAuctionRepository;
pub use documents::{AuctionItemDocument, UserCredentialsDocument};
pub use user_repository::MongoUserRepository;

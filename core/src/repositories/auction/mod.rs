//! Auction item repository module.

mod r#trait;
pub use r#trait::AuctionRepository;

mod mock;
pub use mock::MockAuctionRepository;

#[cfg(test)]
mod tests;

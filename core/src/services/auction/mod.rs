//! Auction catalog service

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuctionService, NewAuctionItem};

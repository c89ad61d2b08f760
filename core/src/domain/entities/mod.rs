//! Domain entities representing core business objects.

pub mod auction_item;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

pub use auction_item::{AuctionItem, AuctionItemStatus};
pub use token::UserJwtPayload;
pub use user::{NewUserCredentials, UserCredentials};

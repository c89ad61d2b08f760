//! Health reporting for both services

mod service;

pub use service::{
    AuctionHealth, AuctionHealthService, AuthHealth, AuthHealthService, ComponentStatus,
};

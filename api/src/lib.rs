//! HTTP layer of the Gavel services
//!
//! Both binaries build their actix-web app from [`app`]; tests drive the
//! same factories against in-memory repositories.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

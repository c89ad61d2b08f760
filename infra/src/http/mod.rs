//! HTTP clients for sibling services

mod auth_client;

pub use auth_client::RemoteAuthClient;

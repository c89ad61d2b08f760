//! # Gavel Core
//!
//! Core business logic and domain layer for the Gavel services.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types shared by the auction catalog and the authentication API.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::{
    AuctionItem, AuctionItemStatus, ImportReport, LoginResponse, NewUserCredentials,
    RegisterResponse, UserCredentials, UserJwtPayload,
};
pub use errors::{AuthError, DomainError, DomainResult, ImportError, PersistenceError, TokenError};
pub use repositories::{AuctionRepository, UserRepository};
pub use services::{AuctionService, AuthService, CsvImportService};

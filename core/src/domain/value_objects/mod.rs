//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod import_report;

// Re-export commonly used types
pub use auth_response::{LoginResponse, RegisterResponse};
pub use import_report::{ImportReport, SkipReason, SkippedRow};

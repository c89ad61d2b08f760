//! Common type definitions shared by the services

pub mod pagination;

pub use pagination::Pagination;

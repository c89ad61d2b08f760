//! Authentication service module
//!
//! Registration, login and token validation. Each successful login bumps
//! the user's token version, which revokes every token issued before it.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;

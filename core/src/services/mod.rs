//! Business services containing domain logic and use cases.

pub mod auction;
pub mod auth;
pub mod csv_import;
pub mod hash;
pub mod monitor;
pub mod token;
pub mod transport;

// Re-export commonly used types
pub use auction::{AuctionService, NewAuctionItem};
pub use auth::AuthService;
pub use csv_import::{CsvImportService, REQUIRED_COLUMNS};
pub use hash::{BcryptHasher, PasswordHasher};
pub use monitor::{
    AuctionHealth, AuctionHealthService, AuthHealth, AuthHealthService, ComponentStatus,
};
pub use token::{JwtTokenSigner, TokenSigner, TokenSignerConfig};
pub use transport::{AuthServiceHealth, TokenValidator};

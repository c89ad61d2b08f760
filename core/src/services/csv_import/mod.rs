//! CSV bulk import of auction listings
//!
//! Rows are parsed with case-insensitive headers, validated one by one, and
//! the survivors are handed to the repository in a single bulk insert.

mod parser;
mod service;


pub use parser::REQUIRED_COLUMNS;
pub use service::CsvImportService;

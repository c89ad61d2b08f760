//! Outcome of a CSV bulk import.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a CSV row was left out of an import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// A required column was absent or blank
    MissingField { field: String },
    /// The price column could not be read as a non-negative number
    InvalidPrice { value: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingField { field } => write!(f, "missing required field '{}'", field),
            SkipReason::InvalidPrice { value } => write!(f, "invalid price '{}'", value),
        }
    }
}

/// A rejected row, identified by its 1-based line in the source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub line: u64,
    /// Title column of the row, when there was one
    pub title: Option<String>,
    pub reason: SkipReason,
}

/// Counts and skip reasons of one import run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Records handed to the repository
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

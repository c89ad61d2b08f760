use serde::{Deserialize, Serialize};

use gavel_core::domain::value_objects::ImportReport;

pub const IMPORT_COMPLETE_MESSAGE: &str = "Data import complete";

/// Outcome of `POST /auction/import/csv`; failures are reported in
/// `message` with a zero count rather than as an error status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub message: String,

    #[serde(rename = "importedCount")]
    pub imported_count: usize,

    #[serde(rename = "skippedCount", default)]
    pub skipped_count: usize,
}

impl ImportResponse {
    pub fn completed(report: &ImportReport) -> Self {
        Self {
            message: IMPORT_COMPLETE_MESSAGE.to_string(),
            imported_count: report.imported,
            skipped_count: report.skipped_count(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            imported_count: 0,
            skipped_count: 0,
        }
    }
}

//! CSV import service

use std::sync::Arc;

use chrono::Utc;

use crate::domain::value_objects::ImportReport;
use crate::errors::DomainResult;
use crate::repositories::AuctionRepository;

use super::parser::parse_listings;

/// Imports auction listings from CSV buffers into an [`AuctionRepository`]
pub struct CsvImportService<A: AuctionRepository> {
    repository: Arc<A>,
}

impl<A: AuctionRepository> CsvImportService<A> {
    pub fn new(repository: Arc<A>) -> Self {
        Self { repository }
    }

    /// Import `data` and return the number of records handed to the store
    pub async fn import_csv_data(&self, data: &[u8]) -> DomainResult<usize> {
        Ok(self.import_with_report(data).await?.imported)
    }

    /// Import `data` and describe which rows were left out and why
    ///
    /// # Returns
    /// * `Ok(ImportReport)` - Bulk insert done (or skipped when no row was valid)
    /// * `Err(DomainError::Import)` - The buffer is not readable CSV
    /// * `Err(DomainError::Persistence)` - The bulk insert failed
    pub async fn import_with_report(&self, data: &[u8]) -> DomainResult<ImportReport> {
        let parsed = parse_listings(data, Utc::now())?;

        for row in &parsed.skipped {
            tracing::warn!(
                line = row.line,
                title = row.title.as_deref().unwrap_or(""),
                reason = %row.reason,
                "Skipping invalid CSV row"
            );
        }

        let imported = parsed.items.len();
        if imported > 0 {
            if let Err(e) = self.repository.insert_many(parsed.items).await {
                tracing::error!(error = %e, "Error inserting auction items");
                return Err(e);
            }
        }

        tracing::info!(
            imported,
            skipped = parsed.skipped.len(),
            "CSV data import finished"
        );

        Ok(ImportReport {
            imported,
            skipped: parsed.skipped,
        })
    }
}

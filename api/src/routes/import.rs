//! CSV import route

use actix_web::{web, HttpResponse};

use gavel_core::errors::ImportError;
use gavel_core::repositories::AuctionRepository;

use crate::dto::ImportResponse;
use crate::routes::AuctionAppState;

/// Handler for POST /auction/import/csv
///
/// Imports the request body when there is one, otherwise the configured
/// CSV file. Failures are reported in the body, never as an error status.
pub async fn import_csv<A>(state: web::Data<AuctionAppState<A>>, body: web::Bytes) -> HttpResponse
where
    A: AuctionRepository + 'static,
{
    let data = if body.iter().all(u8::is_ascii_whitespace) {
        let path = &state.import_config.csv_path;
        match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) => {
                let error = ImportError::Source {
                    message: format!("{}: {}", path.display(), e),
                };
                log::error!("{}", error);
                return HttpResponse::Created().json(ImportResponse::failed(error.to_string()));
            }
        }
    } else {
        body.to_vec()
    };

    match state.import_service.import_with_report(&data).await {
        Ok(report) => HttpResponse::Created().json(ImportResponse::completed(&report)),
        Err(e) => HttpResponse::Created().json(ImportResponse::failed(e.to_string())),
    }
}

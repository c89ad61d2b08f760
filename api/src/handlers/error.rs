//! Mapping of domain and request errors onto HTTP responses

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use validator::ValidationErrors;

use gavel_core::errors::{AuthError, DomainError};
use gavel_shared::{error_codes, ErrorResponse};

/// Message sent for every token failure, whatever the cause
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

fn respond(status: StatusCode, code: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(AuthError::UserAlreadyExists) => respond(
            StatusCode::CONFLICT,
            error_codes::CONFLICT,
            AuthError::UserAlreadyExists.to_string(),
        ),
        DomainError::Auth(AuthError::InvalidCredentials) => respond(
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            AuthError::InvalidCredentials.to_string(),
        ),
        DomainError::Token(e) => {
            log::debug!("Token rejected: {}", e);
            respond(
                StatusCode::UNAUTHORIZED,
                error_codes::TOKEN_INVALID,
                INVALID_TOKEN_MESSAGE,
            )
        }
        DomainError::NotFound { resource } => {
            respond(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, resource)
        }
        DomainError::Validation { message } => {
            respond(StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, message)
        }
        DomainError::Import(e) => {
            respond(StatusCode::BAD_REQUEST, error_codes::IMPORT_ERROR, e.to_string())
        }
        DomainError::Persistence(e) => {
            log::error!("Persistence failure: {}", e);
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::DATABASE_ERROR,
                "A database error occurred",
            )
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            )
        }
    }
}

/// 400 response listing the fields that failed validation
pub fn validation_error_response(errors: ValidationErrors) -> HttpResponse {
    let fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
            .add_detail("fields", fields),
    )
}

/// Turns unreadable JSON bodies into the shared error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        err.to_string(),
    ));
    InternalError::from_response(err, response).into()
}

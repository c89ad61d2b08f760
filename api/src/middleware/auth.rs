//! Bearer-token guard for routes that need a signed-in caller.
//!
//! The auction API holds no signing secret; the guard hands the token to
//! a [`TokenValidator`] (the auth API in production) and only lets the
//! request through on a positive answer.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use gavel_core::services::TokenValidator;
use gavel_shared::{error_codes, ErrorResponse};

use crate::handlers::error::INVALID_TOKEN_MESSAGE;

pub const MISSING_HEADER_MESSAGE: &str = "Missing or invalid Authorization header";

/// Guard middleware factory
#[derive(Clone)]
pub struct BearerAuth {
    validator: Arc<dyn TokenValidator>,
}

impl BearerAuth {
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self { validator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            validator: Arc::clone(&self.validator),
        }))
    }
}

/// Guard middleware service
pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    validator: Arc<dyn TokenValidator>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let validator = Arc::clone(&self.validator);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(unauthorized(MISSING_HEADER_MESSAGE)),
            };

            match validator.validate_token(&token).await {
                Ok(true) => service.call(req).await,
                Ok(false) => Err(unauthorized(INVALID_TOKEN_MESSAGE)),
                Err(e) => {
                    log::error!("Token validation failed: {}", e);
                    Err(unauthorized(INVALID_TOKEN_MESSAGE))
                }
            }
        })
    }
}

/// Extracts the token of a `Bearer <token>` Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

fn unauthorized(message: &'static str) -> Error {
    let response = HttpResponse::Unauthorized()
        .json(ErrorResponse::new(error_codes::UNAUTHORIZED, message));
    InternalError::from_response(message, response).into()
}

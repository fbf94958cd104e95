//! Authentication extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use chirp_core::domain::{Identity, PolicyDecision};

use super::error::AppError;
use crate::state::AppState;

/// Verified caller, produced by running the authorization gate on the
/// request's `Authorization` header.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(principal: Principal) -> impl Responder {
///     format!("Hello, {}!", principal.identity())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Principal(PolicyDecision);

impl Principal {
    pub fn identity(&self) -> &Identity {
        &self.0.principal
    }
}

impl FromRequest for Principal {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Err(AppError::Unauthorized));
        };

        // A header that is not valid UTF-8 is treated as absent
        let raw_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let resource = format!("{} {}", req.method(), req.path());

        match state.gate.authorize(raw_header, &resource) {
            Ok(decision) => ready(Ok(Principal(decision))),
            Err(_) => ready(Err(AppError::Unauthorized)),
        }
    }
}

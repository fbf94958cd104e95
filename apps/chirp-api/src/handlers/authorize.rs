//! Gateway authorizer endpoint.

use actix_web::{HttpResponse, web};

use chirp_shared::{AuthorizerRequest, AuthorizerResponse};

use super::parse_body;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/authorize
///
/// Called by an external gateway with the caller's raw `Authorization`
/// value and the invoked method ARN. Answers with an Allow policy for the
/// verified principal, or 401 without any policy document. When the event
/// carries no method ARN only the principal is returned.
pub async fn authorize(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let req: AuthorizerRequest = parse_body(&body).ok_or(AppError::Unauthorized)?;
    let resource = req.method_arn.as_deref();

    let decision = state
        .gate
        .authorize(req.authorization_token.as_deref(), resource.unwrap_or_default())
        .map_err(|_| AppError::Unauthorized)?;

    Ok(HttpResponse::Ok().json(AuthorizerResponse::new(
        decision.principal.as_str(),
        Some(decision.effect.as_str()),
        resource,
    )))
}

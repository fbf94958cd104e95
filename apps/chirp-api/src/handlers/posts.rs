//! Post handlers.

use actix_web::{HttpResponse, web};

use chirp_shared::dto::CreatePostRequest;

use super::{parse_body, post_response};
use crate::middleware::auth::Principal;
use crate::middleware::error::{AppError, AppResult, CREATE_POST_FAILED};
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    principal: Principal,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let req: CreatePostRequest =
        parse_body(&body).ok_or(AppError::BadRequest(CREATE_POST_FAILED))?;

    let post = state
        .posts
        .create_post(principal.identity(), req.text)
        .await
        .map_err(|e| AppError::from_service(e, CREATE_POST_FAILED))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

//! Follow handler.

use actix_web::{HttpResponse, web};

use chirp_shared::dto::{FollowRequest, FollowResponse};

use super::parse_body;
use crate::middleware::auth::Principal;
use crate::middleware::error::{AppError, AppResult, INPUT_EMAIL};
use crate::state::AppState;

/// POST /api/follow
pub async fn add_follow(
    state: web::Data<AppState>,
    principal: Principal,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let req: FollowRequest = parse_body(&body).ok_or(AppError::BadRequest(INPUT_EMAIL))?;

    let list = state
        .follows
        .add_follow(principal.identity(), &req.follow_id)
        .await
        .map_err(|e| AppError::from_service(e, INPUT_EMAIL))?;

    Ok(HttpResponse::Ok().json(FollowResponse {
        user_id: list.user_id.into(),
        following: list.following.into_iter().map(String::from).collect(),
    }))
}

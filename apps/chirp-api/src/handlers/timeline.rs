//! Timeline handler.

use actix_web::{HttpResponse, web};

use chirp_shared::dto::{TimelineRequest, TimelineResponse};

use super::{parse_body, post_response};
use crate::middleware::error::{AppError, AppResult, INPUT_EMAIL};
use crate::state::AppState;

/// POST /api/timeline
///
/// Unauthenticated: any caller may read any user's timeline by id.
pub async fn get_timeline(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let req: TimelineRequest = parse_body(&body).ok_or(AppError::BadRequest(INPUT_EMAIL))?;

    let posts = state
        .timeline
        .get_timeline(&req.id)
        .await
        .map_err(|e| AppError::from_service(e, INPUT_EMAIL))?;

    Ok(HttpResponse::Ok().json(TimelineResponse {
        msgs: posts.into_iter().map(post_response).collect(),
    }))
}

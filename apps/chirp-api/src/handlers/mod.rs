//! HTTP handlers and route configuration.

mod authorize;
mod follow;
mod health;
mod posts;
mod timeline;


use actix_web::web;
use serde::de::DeserializeOwned;

use chirp_core::domain::Post;
use chirp_shared::dto::PostResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/authorize", web::post().to(authorize::authorize))
            .route("/timeline", web::post().to(timeline::get_timeline))
            // Bearer-protected routes
            .route("/posts", web::post().to(posts::create_post))
            .route("/follow", web::post().to(follow::add_follow)),
    );
}

/// Decode a JSON body. Any decoding failure, including a missing or
/// mistyped field, yields `None` so each route can answer with its own
/// fixed message.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Option<T> {
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected request body");
            None
        }
    }
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        user_id: post.user_id.into(),
        timestamp: post.timestamp,
        post: post.text,
    }
}

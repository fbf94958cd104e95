//! Error handling - maps failures to fixed plain-text responses.
//!
//! Callers only ever see a short fixed message per operation; the
//! underlying error is logged.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use chirp_core::ServiceError;

pub const UNAUTHORIZED: &str = "Unauthorized";
pub const CREATE_POST_FAILED: &str = "could not create the post";
pub const INPUT_EMAIL: &str = "input email.";
pub const FETCH_FOLLOWING_FAILED: &str = "could not fetch following.";
pub const FETCH_POSTS_FAILED: &str = "could not fetch posts.";
pub const FETCH_FOLLOWS_FAILED: &str = "could not fetch follows.";

/// Status used when a store failure carries no status of its own.
pub const STORE_FALLBACK_STATUS: StatusCode = StatusCode::NOT_IMPLEMENTED;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest(&'static str),
    Unauthorized,
    Store {
        status: StatusCode,
        message: &'static str,
    },
}

impl AppError {
    /// Convert a service failure. Validation failures answer with the
    /// operation's own message; each store step has a fixed message.
    pub fn from_service(err: ServiceError, validation_message: &'static str) -> Self {
        let message = match &err {
            ServiceError::Validation(detail) => {
                tracing::warn!(detail = %detail, "Validation failed");
                return AppError::BadRequest(validation_message);
            }
            ServiceError::PostWrite(_) => CREATE_POST_FAILED,
            ServiceError::FollowingLookup(_) => FETCH_FOLLOWING_FAILED,
            ServiceError::PostLookup(_) => FETCH_POSTS_FAILED,
            ServiceError::FollowWrite(_) => FETCH_FOLLOWS_FAILED,
        };

        let status = err
            .status_code()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(STORE_FALLBACK_STATUS);

        tracing::error!(error = %err, status = status.as_u16(), "Store failure");

        AppError::Store { status, message }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(message) => *message,
            AppError::Unauthorized => UNAUTHORIZED,
            AppError::Store { message, .. } => *message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Store { status, message } => write!(f, "Store error ({}): {}", status, message),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Store { status, .. } => *status,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.message())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

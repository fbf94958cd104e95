//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub text: String,
}

/// Request for a user's timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRequest {
    /// Identity whose timeline is requested.
    pub id: String,
}

/// Request to follow another user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowRequest {
    pub follow_id: String,
}

/// A post as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub post: String,
}

/// A timeline, newest post first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineResponse {
    pub msgs: Vec<PostResponse>,
}

/// A follow list after an append.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowResponse {
    pub user_id: String,
    pub following: Vec<String>,
}

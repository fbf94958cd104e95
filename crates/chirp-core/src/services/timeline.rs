use std::sync::Arc;

use crate::domain::{Identity, Post};
use crate::error::ServiceError;
use crate::ports::{FollowRepository, PostQuery, PostRepository};

/// Builds a user's timeline: posts from everyone the user follows, newest first.
///
/// The target user is an explicit id, not the caller's identity, and no
/// access check is made on it.
#[derive(Clone)]
pub struct TimelineService {
    follows: Arc<dyn FollowRepository>,
    posts: Arc<dyn PostRepository>,
    limit: Option<usize>,
}

impl TimelineService {
    pub fn new(follows: Arc<dyn FollowRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self {
            follows,
            posts,
            limit: None,
        }
    }

    /// Cap the number of posts returned per timeline.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub async fn get_timeline(&self, requested_user_id: &str) -> Result<Vec<Post>, ServiceError> {
        let user_id = Identity::parse(requested_user_id)?;

        let following = self.follows.find(&user_id).await.map_err(|e| {
            tracing::error!(error = %e, user = %user_id.masked(), "Following lookup failed");
            ServiceError::FollowingLookup(e)
        })?;

        let Some(following) = following.filter(|list| !list.is_empty()) else {
            tracing::debug!(user = %user_id.masked(), "User follows nobody");
            return Ok(Vec::new());
        };

        let query = PostQuery::authored_by(&following.following).with_limit(self.limit);

        let posts = self.posts.query(&query).await.map_err(|e| {
            tracing::error!(error = %e, user = %user_id.masked(), "Post lookup failed");
            ServiceError::PostLookup(e)
        })?;

        tracing::debug!(
            user = %user_id.masked(),
            authors = query.authors.len(),
            posts = posts.len(),
            "Timeline fetched"
        );

        Ok(posts)
    }
}

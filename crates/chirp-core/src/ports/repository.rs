use async_trait::async_trait;

use crate::domain::{FollowList, Identity, Post};
use crate::error::StoreError;

/// Query over the post collection: posts whose author is one of `authors`,
/// newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub authors: Vec<Identity>,
    pub limit: Option<usize>,
}

impl PostQuery {
    /// Build a query for posts authored by any of the given identities.
    ///
    /// Repeated authors collapse to one entry, keeping first-seen order.
    pub fn authored_by<'a>(authors: impl IntoIterator<Item = &'a Identity>) -> Self {
        let mut unique: Vec<Identity> = Vec::new();
        for author in authors {
            if !unique.contains(author) {
                unique.push(author.clone());
            }
        }

        Self {
            authors: unique,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.authors.contains(&post.user_id)
    }

    /// Order newest first and apply the limit.
    pub fn finish(&self, mut posts: Vec<Post>) -> Vec<Post> {
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(limit) = self.limit {
            posts.truncate(limit);
        }
        posts
    }
}

/// Post collection, keyed by (user_id, timestamp).
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Write a post unconditionally.
    async fn insert(&self, post: Post) -> Result<Post, StoreError>;

    /// Run a post query; results are ordered newest first.
    async fn query(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError>;
}

/// Follow-list collection, keyed by user_id.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Fetch the follow list of a user, if one was ever created.
    async fn find(&self, user_id: &Identity) -> Result<Option<FollowList>, StoreError>;

    /// Append `followed` to the user's list, creating the record if absent.
    /// Returns the updated record.
    async fn append(&self, user_id: &Identity, followed: &Identity)
    -> Result<FollowList, StoreError>;
}

use std::sync::Arc;

use crate::domain::{Identity, Post};
use crate::error::ServiceError;
use crate::ports::PostRepository;

/// Creates posts on behalf of a verified identity.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Write a new post authored by `author`. Exactly one store write.
    pub async fn create_post(&self, author: &Identity, text: String) -> Result<Post, ServiceError> {
        let post = Post::new(author.clone(), text);

        tracing::debug!(post_id = %post.id, author = %author.masked(), "Writing post");

        self.posts.insert(post).await.map_err(|e| {
            tracing::error!(error = %e, "Post write failed");
            ServiceError::PostWrite(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{FailingStore, MemoryStore};

    #[tokio::test]
    async fn test_create_post_sets_author_and_fresh_id() {
        let store = Arc::new(MemoryStore::default());
        let service = PostService::new(store.clone());
        let author = Identity::parse("a@example.com").unwrap();

        let first = service.create_post(&author, "hello".into()).await.unwrap();
        let second = service.create_post(&author, "hello".into()).await.unwrap();

        assert_eq!(first.user_id, author);
        assert_eq!(first.text, "hello");
        assert_ne!(first.id, second.id);
        assert_eq!(store.post_count().await, 2);
    }

    #[tokio::test]
    async fn test_create_post_surfaces_store_status() {
        let service = PostService::new(Arc::new(FailingStore::with_status(503)));
        let author = Identity::parse("a@example.com").unwrap();

        let err = service.create_post(&author, "hello".into()).await.unwrap_err();

        assert!(matches!(err, ServiceError::PostWrite(_)));
        assert_eq!(err.status_code(), Some(503));
    }
}

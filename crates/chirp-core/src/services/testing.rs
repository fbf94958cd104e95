//! Test doubles for the store ports.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{FollowList, Identity, Post};
use crate::error::StoreError;
use crate::ports::{FollowRepository, PostQuery, PostRepository};

/// Both collections in one struct, counting every port call.
#[derive(Default)]
pub struct MemoryStore {
    posts: RwLock<Vec<Post>>,
    follows: RwLock<HashMap<Identity, FollowList>>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub async fn follow(&self, user: &str, followed: &str) {
        let user = Identity::parse(user).unwrap();
        let mut follows = self.follows.write().await;
        follows
            .entry(user.clone())
            .or_insert_with(|| FollowList::new(user))
            .append(Identity::parse(followed).unwrap());
    }

    pub async fn post(&self, author: &str, timestamp: i64, text: &str) {
        let mut post = Post::new(Identity::parse(author).unwrap(), text.to_string());
        post.timestamp = timestamp;
        self.posts.write().await.push(post);
    }

    pub async fn post_count(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn query(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let posts = self.posts.read().await;
        let matching = posts.iter().filter(|p| query.matches(p)).cloned().collect();
        Ok(query.finish(matching))
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn find(&self, user_id: &Identity) -> Result<Option<FollowList>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.follows.read().await.get(user_id).cloned())
    }

    async fn append(
        &self,
        user_id: &Identity,
        followed: &Identity,
    ) -> Result<FollowList, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut follows = self.follows.write().await;
        let list = follows
            .entry(user_id.clone())
            .or_insert_with(|| FollowList::new(user_id.clone()));
        list.append(followed.clone());
        Ok(list.clone())
    }
}

/// Store whose every call fails, optionally with a status code.
pub struct FailingStore {
    status: Option<u16>,
}

impl FailingStore {
    pub fn with_status(status: u16) -> Self {
        Self {
            status: Some(status),
        }
    }

    pub fn without_status() -> Self {
        Self { status: None }
    }

    fn error(&self) -> StoreError {
        match self.status {
            Some(status) => StoreError::Rejected {
                status,
                message: "simulated".to_string(),
            },
            None => StoreError::Connection("simulated".to_string()),
        }
    }
}

#[async_trait]
impl PostRepository for FailingStore {
    async fn insert(&self, _post: Post) -> Result<Post, StoreError> {
        Err(self.error())
    }

    async fn query(&self, _query: &PostQuery) -> Result<Vec<Post>, StoreError> {
        Err(self.error())
    }
}

#[async_trait]
impl FollowRepository for FailingStore {
    async fn find(&self, _user_id: &Identity) -> Result<Option<FollowList>, StoreError> {
        Err(self.error())
    }

    async fn append(
        &self,
        _user_id: &Identity,
        _followed: &Identity,
    ) -> Result<FollowList, StoreError> {
        Err(self.error())
    }
}

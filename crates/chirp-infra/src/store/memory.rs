//! In-memory store implementation - used when Redis is not configured or unreachable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use chirp_core::domain::{FollowList, Identity, Post};
use chirp_core::error::StoreError;
use chirp_core::ports::{FollowRepository, PostQuery, PostRepository};

/// In-memory post collection, partitioned by author and sorted by timestamp.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    partitions: RwLock<HashMap<Identity, Vec<Post>>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            partitions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        let mut partitions = self.partitions.write().await;
        let partition = partitions.entry(post.user_id.clone()).or_default();

        // keep each partition ordered by its sort key
        let pos = partition.partition_point(|p| p.timestamp <= post.timestamp);
        partition.insert(pos, post.clone());

        Ok(post)
    }

    async fn query(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError> {
        let partitions = self.partitions.read().await;

        let posts = query
            .authors
            .iter()
            .filter_map(|author| partitions.get(author))
            .flat_map(|partition| partition.iter().cloned())
            .collect();

        Ok(query.finish(posts))
    }
}

/// In-memory follow-list collection.
///
/// Appends happen under the write lock, so concurrent follows never lose updates.
pub struct InMemoryFollowStore {
    lists: RwLock<HashMap<Identity, FollowList>>,
}

impl InMemoryFollowStore {
    pub fn new() -> Self {
        Self {
            lists: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryFollowStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollowStore {
    async fn find(&self, user_id: &Identity) -> Result<Option<FollowList>, StoreError> {
        let lists = self.lists.read().await;
        Ok(lists.get(user_id).cloned())
    }

    async fn append(
        &self,
        user_id: &Identity,
        followed: &Identity,
    ) -> Result<FollowList, StoreError> {
        let mut lists = self.lists.write().await;
        let list = lists
            .entry(user_id.clone())
            .or_insert_with(|| FollowList::new(user_id.clone()));
        list.append(followed.clone());

        Ok(list.clone())
    }
}

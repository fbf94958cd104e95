//! Redis store implementation for both collections.
//!
//! Layout, under a configurable key prefix:
//! - `<prefix>:posts:<user_id>` sorted set, member = post JSON, score = timestamp
//! - `<prefix>:following:<user_id>` list of followed user ids, in follow order

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};

use chirp_core::domain::{FollowList, Identity, Post};
use chirp_core::error::StoreError;
use chirp_core::ports::{FollowRepository, PostQuery, PostRepository};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Namespace for every key written by the store
    pub key_prefix: String,
    /// Whether to fallback to the in-memory store if Redis is unavailable
    pub fallback_to_memory: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            key_prefix: "chirp".to_string(),
            fallback_to_memory: true,
        }
    }
}

/// Redis-backed post and follow-list store.
///
/// Uses connection manager for automatic reconnection; cloning is cheap.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    pub async fn new(config: &RedisConfig) -> Result<Self, StoreError> {
        let client =
            Client::open(config.url.as_str()).map_err(|e| StoreError::Connection(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Connection("Connection timed out".to_string()))?
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, prefix = %config.key_prefix, "Connected to Redis store");

        Ok(Self {
            conn,
            key_prefix: config.key_prefix.clone(),
        })
    }

    fn posts_key(&self, user_id: &Identity) -> String {
        format!("{}:posts:{}", self.key_prefix, user_id)
    }

    fn following_key(&self, user_id: &Identity) -> String {
        format!("{}:following:{}", self.key_prefix, user_id)
    }
}

fn store_error(e: RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Operation(e.to_string())
    }
}

/// Inclusive `ZREVRANGE` stop index for a per-partition limit. Limits that
/// do not fit an index read the whole partition.
fn range_stop(limit: Option<usize>) -> isize {
    limit
        .and_then(|limit| isize::try_from(limit).ok())
        .map(|limit| limit - 1)
        .unwrap_or(-1)
}

fn parse_following(user_id: &Identity, raw: Vec<String>) -> Result<FollowList, StoreError> {
    let following = raw
        .into_iter()
        .map(|id| Identity::parse(id).map_err(|e| StoreError::Serialization(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FollowList {
        user_id: user_id.clone(),
        following,
    })
}

#[async_trait]
impl PostRepository for RedisStore {
    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        let member =
            serde_json::to_string(&post).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let key = self.posts_key(&post.user_id);

        let mut conn = self.conn.clone();
        conn.zadd::<_, _, _, ()>(&key, member, post.timestamp)
            .await
            .map_err(store_error)?;

        Ok(post)
    }

    async fn query(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError> {
        if query.authors.is_empty() {
            return Ok(Vec::new());
        }

        // newest `limit` of each partition is enough to build the merged page
        let stop = range_stop(query.limit);

        let mut pipe = redis::pipe();
        for author in &query.authors {
            pipe.zrevrange(self.posts_key(author), 0, stop);
        }

        let mut conn = self.conn.clone();
        let partitions: Vec<Vec<String>> = pipe.query_async(&mut conn).await.map_err(store_error)?;

        let posts = partitions
            .into_iter()
            .flatten()
            .map(|raw| {
                serde_json::from_str::<Post>(&raw)
                    .map_err(|e| StoreError::Serialization(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(query.finish(posts))
    }
}

#[async_trait]
impl FollowRepository for RedisStore {
    async fn find(&self, user_id: &Identity) -> Result<Option<FollowList>, StoreError> {
        let mut conn = self.conn.clone();
        let raw: Vec<String> = conn
            .lrange(self.following_key(user_id), 0, -1)
            .await
            .map_err(store_error)?;

        // Redis drops empty lists, so "no entries" and "no record" are the same
        if raw.is_empty() {
            return Ok(None);
        }

        parse_following(user_id, raw).map(Some)
    }

    async fn append(
        &self,
        user_id: &Identity,
        followed: &Identity,
    ) -> Result<FollowList, StoreError> {
        let key = self.following_key(user_id);

        // RPUSH creates the list when missing; MULTI/EXEC returns the list as written
        let mut conn = self.conn.clone();
        let (raw,): (Vec<String>,) = redis::pipe()
            .atomic()
            .rpush(&key, followed.as_str())
            .ignore()
            .lrange(&key, 0, -1)
            .query_async(&mut conn)
            .await
            .map_err(store_error)?;

        parse_following(user_id, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn get_test_store() -> Option<RedisStore> {
        let config = RedisConfig {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(1),
            key_prefix: format!("chirp-test-{}", uuid::Uuid::new_v4()),
            fallback_to_memory: false,
        };

        RedisStore::new(&config).await.ok()
    }

    /// Drop every key written under the store's test prefix.
    async fn cleanup(store: &RedisStore) {
        let mut conn = store.conn.clone();
        let keys: Vec<String> = conn
            .keys(format!("{}:*", store.key_prefix))
            .await
            .unwrap_or_default();
        if !keys.is_empty() {
            let _: Result<(), _> = conn.unlink(keys).await;
        }
    }

    #[test]
    fn test_range_stop() {
        assert_eq!(range_stop(None), -1);
        assert_eq!(range_stop(Some(1)), 0);
        assert_eq!(range_stop(Some(50)), 49);
        assert_eq!(range_stop(Some(isize::MAX as usize)), isize::MAX - 1);
        assert_eq!(range_stop(Some(usize::MAX)), -1);
    }

    fn id(s: &str) -> Identity {
        Identity::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_redis_posts_round_trip_newest_first() {
        let store = match get_test_store().await {
            Some(s) => s,
            None => {
                tracing::warn!("Redis not available, skipping test");
                return;
            }
        };

        let mut older = Post::new(id("b@x.io"), "older".into());
        older.timestamp = 1_000;
        let mut newer = Post::new(id("c@x.io"), "newer".into());
        newer.timestamp = 2_000;
        store.insert(older.clone()).await.unwrap();
        store.insert(newer.clone()).await.unwrap();

        let posts = store
            .query(&PostQuery::authored_by(&[id("b@x.io"), id("c@x.io")]))
            .await
            .unwrap();

        assert_eq!(posts, vec![newer, older]);

        cleanup(&store).await;
    }

    #[tokio::test]
    async fn test_redis_follow_append_keeps_duplicates() {
        let store = match get_test_store().await {
            Some(s) => s,
            None => return,
        };
        let user = id("a@x.io");

        assert_eq!(store.find(&user).await.unwrap(), None);

        store.append(&user, &id("b@x.io")).await.unwrap();
        let list = store.append(&user, &id("b@x.io")).await.unwrap();

        assert_eq!(list.following, vec![id("b@x.io"), id("b@x.io")]);
        assert_eq!(store.find(&user).await.unwrap(), Some(list));

        cleanup(&store).await;
    }
}

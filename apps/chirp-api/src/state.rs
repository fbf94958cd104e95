//! Application state - shared across all handlers.
//!
//! Built once at startup; every handle inside is immutable and reused
//! across requests and workers.

use std::sync::Arc;

use anyhow::Context;

use chirp_core::AuthorizationGate;
use chirp_core::ports::{FollowRepository, PostRepository, TokenVerifier};
use chirp_core::services::{FollowService, PostService, TimelineService};
use chirp_infra::auth::JwtTokenVerifier;
use chirp_infra::store::{InMemoryFollowStore, InMemoryPostStore};

use crate::config::{AppConfig, RedisSettings, StoreBackend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub gate: AuthorizationGate,
    pub posts: PostService,
    pub timeline: TimelineService,
    pub follows: FollowService,
    /// Store backend actually in use.
    pub backend: StoreBackend,
}

type Stores = (Arc<dyn PostRepository>, Arc<dyn FollowRepository>);

impl AppState {
    /// Build the application state with the configured implementations.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let verifier = JwtTokenVerifier::new(config.jwt.clone())
            .context("Failed to build JWT verifier")?;

        let (backend, (posts, follows)) = match config.store {
            StoreBackend::Memory => (StoreBackend::Memory, memory_stores()),
            StoreBackend::Redis => connect_redis(&config.redis).await?,
        };

        tracing::info!(backend = backend.as_str(), "Application state initialized");

        Ok(Self::from_parts(
            Arc::new(verifier),
            posts,
            follows,
            backend,
            config.timeline_limit,
        ))
    }

    /// Assemble the state from already-built ports.
    pub fn from_parts(
        verifier: Arc<dyn TokenVerifier>,
        posts: Arc<dyn PostRepository>,
        follows: Arc<dyn FollowRepository>,
        backend: StoreBackend,
        timeline_limit: Option<usize>,
    ) -> Self {
        Self {
            gate: AuthorizationGate::new(verifier),
            posts: PostService::new(posts.clone()),
            timeline: TimelineService::new(follows.clone(), posts).with_limit(timeline_limit),
            follows: FollowService::new(follows),
            backend,
        }
    }
}

fn memory_stores() -> Stores {
    (
        Arc::new(InMemoryPostStore::new()),
        Arc::new(InMemoryFollowStore::new()),
    )
}

#[cfg(feature = "redis")]
async fn connect_redis(settings: &RedisSettings) -> anyhow::Result<(StoreBackend, Stores)> {
    use chirp_infra::store::{RedisConfig, RedisStore};

    let config = RedisConfig {
        url: settings.url.clone(),
        connect_timeout: settings.connect_timeout,
        key_prefix: settings.key_prefix.clone(),
        fallback_to_memory: settings.fallback_to_memory,
    };

    match RedisStore::new(&config).await {
        Ok(store) => {
            let store = Arc::new(store);
            Ok((StoreBackend::Redis, (store.clone(), store)))
        }
        Err(e) if config.fallback_to_memory => {
            tracing::error!(
                "Failed to connect to Redis: {}. Using in-memory fallback.",
                e
            );
            Ok((StoreBackend::Memory, memory_stores()))
        }
        Err(e) => Err(e).context("Failed to connect to Redis"),
    }
}

#[cfg(not(feature = "redis"))]
async fn connect_redis(_settings: &RedisSettings) -> anyhow::Result<(StoreBackend, Stores)> {
    tracing::warn!("Built without redis feature - using in-memory store");
    Ok((StoreBackend::Memory, memory_stores()))
}

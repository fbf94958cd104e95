//! # Chirp Infrastructure
//!
//! Concrete implementations of the ports defined in `chirp-core`.
//! This crate contains token verification and key-value store integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `auth` - JWT verification via jsonwebtoken
//! - `redis` - Redis-backed post and follow-list store

pub mod store;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use store::{InMemoryFollowStore, InMemoryPostStore};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenVerifier};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use store::{RedisConfig, RedisStore};

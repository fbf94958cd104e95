//! Store implementations - Redis and in-memory fallback.

mod memory;

pub use memory::{InMemoryFollowStore, InMemoryPostStore};

#[cfg(feature = "redis")]
mod redis;
#[cfg(feature = "redis")]
pub use self::redis::{RedisConfig, RedisStore};

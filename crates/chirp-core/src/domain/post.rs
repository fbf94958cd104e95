use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identity;

/// Post entity - a short text message authored by one identity.
///
/// Posts are append-only: created once, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Identity,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(rename = "post")]
    pub text: String,
}

impl Post {
    /// Create a new post with a fresh id, stamped with the current time.
    pub fn new(user_id: Identity, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            timestamp: Utc::now().timestamp_millis(),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_posts_get_distinct_ids() {
        let author = Identity::parse("a@example.com").unwrap();
        let first = Post::new(author.clone(), "hello".into());
        let second = Post::new(author, "hello".into());

        assert_ne!(first.id, second.id);
        assert!(first.timestamp > 0);
    }

    #[test]
    fn test_persisted_shape() {
        let post = Post::new(Identity::parse("a@example.com").unwrap(), "hi".into());
        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(value["user_id"], "a@example.com");
        assert_eq!(value["post"], "hi");
        assert!(value.get("text").is_none());
    }
}

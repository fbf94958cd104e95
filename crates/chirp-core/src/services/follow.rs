use std::sync::Arc;

use crate::domain::{FollowList, Identity};
use crate::error::ServiceError;
use crate::ports::FollowRepository;

/// Appends followed identities to the caller's follow list.
#[derive(Clone)]
pub struct FollowService {
    follows: Arc<dyn FollowRepository>,
}

impl FollowService {
    pub fn new(follows: Arc<dyn FollowRepository>) -> Self {
        Self { follows }
    }

    /// Append `follow_id` to `caller`'s list, creating the list on first follow.
    ///
    /// No deduplication: following someone twice records them twice.
    pub async fn add_follow(
        &self,
        caller: &Identity,
        follow_id: &str,
    ) -> Result<FollowList, ServiceError> {
        let followed = Identity::parse(follow_id)?;

        let list = self.follows.append(caller, &followed).await.map_err(|e| {
            tracing::error!(error = %e, caller = %caller.masked(), "Follow append failed");
            ServiceError::FollowWrite(e)
        })?;

        tracing::debug!(
            caller = %caller.masked(),
            followed = %followed.masked(),
            following = list.following.len(),
            "Follow appended"
        );

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{FailingStore, MemoryStore};

    fn id(s: &str) -> Identity {
        Identity::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_first_follow_creates_list() {
        let store = Arc::new(MemoryStore::default());
        let service = FollowService::new(store.clone());

        let list = service.add_follow(&id("a@example.com"), "b@example.com").await.unwrap();

        assert_eq!(list.user_id, id("a@example.com"));
        assert_eq!(list.following, vec![id("b@example.com")]);
    }

    #[tokio::test]
    async fn test_follow_twice_appends_twice() {
        let store = Arc::new(MemoryStore::default());
        let service = FollowService::new(store.clone());
        let caller = id("a@example.com");

        service.add_follow(&caller, "b@example.com").await.unwrap();
        let list = service.add_follow(&caller, "b@example.com").await.unwrap();

        assert_eq!(list.following, vec![id("b@example.com"), id("b@example.com")]);
        let stored = store.find(&caller).await.unwrap().unwrap();
        assert_eq!(stored.following.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_follow_id_never_reaches_store() {
        let store = Arc::new(MemoryStore::default());
        let service = FollowService::new(store.clone());

        let err = service.add_follow(&id("a@example.com"), " ").await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(store.calls().await, 0);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_status() {
        let service = FollowService::new(Arc::new(FailingStore::with_status(429)));

        let err = service.add_follow(&id("a@example.com"), "b@example.com").await.unwrap_err();

        assert!(matches!(err, ServiceError::FollowWrite(_)));
        assert_eq!(err.status_code(), Some(429));
    }
}

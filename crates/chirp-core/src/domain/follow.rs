use serde::{Deserialize, Serialize};

use super::Identity;

/// Per-user record of the identities that user follows.
///
/// The list is append-only and keeps duplicates: following the same
/// identity twice stores it twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowList {
    pub user_id: Identity,
    pub following: Vec<Identity>,
}

impl FollowList {
    pub fn new(user_id: Identity) -> Self {
        Self {
            user_id,
            following: Vec::new(),
        }
    }

    pub fn append(&mut self, followed: Identity) {
        self.following.push(followed);
    }

    pub fn is_empty(&self) -> bool {
        self.following.is_empty()
    }
}

//! Domain entities - the core business objects.

mod follow;
mod identity;
mod policy;
mod post;

pub use follow::FollowList;
pub use identity::Identity;
pub use policy::{Effect, PolicyDecision};
pub use post::Post;

//! Data services - create post, fetch timeline, add follow.

mod follow;
mod post;
mod timeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use follow::FollowService;
pub use post::PostService;
pub use timeline::TimelineService;

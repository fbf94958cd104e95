//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;

pub use auth::{TokenVerifier, VerificationError};
pub use repository::{FollowRepository, PostQuery, PostRepository};

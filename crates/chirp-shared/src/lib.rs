//! # Chirp Shared
//!
//! Wire types shared between the API server and its clients.

pub mod dto;
pub mod policy;

pub use policy::{AuthorizerRequest, AuthorizerResponse, PolicyDocument};

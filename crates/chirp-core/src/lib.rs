//! # Chirp Core
//!
//! The domain layer of the Chirp feed backend: identities, posts, follow
//! lists, the authorization gate and the three data services.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod auth;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use auth::{AuthorizationGate, Unauthorized};
pub use error::{DomainError, ServiceError, StoreError};

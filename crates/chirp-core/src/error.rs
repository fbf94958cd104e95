//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Store-level errors raised by key-value store adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store operation failed: {0}")]
    Operation(String),

    #[error("Record serialization failed: {0}")]
    Serialization(String),

    /// The store answered with an explicit status (throttling, bad request...).
    #[error("Store rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl StoreError {
    /// Status code reported by the store, when it reported one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            StoreError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Service errors - one variant per failure path of the data operations.
///
/// Each store call gets its own variant so callers can answer with a
/// distinct message per failing step.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Could not write post: {0}")]
    PostWrite(#[source] StoreError),

    #[error("Could not fetch following: {0}")]
    FollowingLookup(#[source] StoreError),

    #[error("Could not fetch posts: {0}")]
    PostLookup(#[source] StoreError),

    #[error("Could not append follow: {0}")]
    FollowWrite(#[source] StoreError),
}

impl ServiceError {
    /// The underlying store failure, if any.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            ServiceError::Validation(_) => None,
            ServiceError::PostWrite(e)
            | ServiceError::FollowingLookup(e)
            | ServiceError::PostLookup(e)
            | ServiceError::FollowWrite(e) => Some(e),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.store_error().and_then(StoreError::status_code)
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ServiceError::Validation(msg),
        }
    }
}

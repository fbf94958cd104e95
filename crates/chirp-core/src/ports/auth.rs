//! Token verification port.

use crate::domain::Identity;

/// Verifies a bearer token and extracts the identity it was issued for.
///
/// Implementations hold the expected audience and public key; both are
/// process-wide configuration loaded once at startup.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Identity, VerificationError>;
}

/// Token verification failures.
///
/// Callers of the authorization gate never see these; they all collapse
/// into a single unauthorized outcome and are only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Audience mismatch")]
    AudienceMismatch,

    #[error("Issuer mismatch")]
    IssuerMismatch,

    #[error("Token expired")]
    Expired,

    #[error("Token carries no identity claim")]
    MissingIdentity,

    #[error("Verification failed: {0}")]
    Other(String),
}

//! Authorization gate - turns a raw `Authorization` header into a policy decision.

use std::sync::Arc;

use crate::domain::PolicyDecision;
use crate::ports::TokenVerifier;

/// Single, detail-free rejection produced by the gate.
///
/// Missing headers, malformed headers and every verification failure end
/// up here; the reason is logged, never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unauthorized")]
pub struct Unauthorized;

/// Wraps a [`TokenVerifier`] and produces Allow decisions for valid bearer tokens.
#[derive(Clone)]
pub struct AuthorizationGate {
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthorizationGate {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Authorize a request against `resource`.
    ///
    /// The header must be exactly `<scheme> <token>` where the scheme is
    /// `bearer` in any case.
    pub fn authorize(
        &self,
        raw_header: Option<&str>,
        resource: &str,
    ) -> Result<PolicyDecision, Unauthorized> {
        let Some(raw_header) = raw_header else {
            tracing::debug!(resource, "No authorization header");
            return Err(Unauthorized);
        };

        let Some(token) = bearer_token(raw_header) else {
            tracing::debug!(resource, "Malformed authorization header");
            return Err(Unauthorized);
        };

        match self.verifier.verify(token) {
            Ok(identity) => {
                tracing::info!(principal = %identity.masked(), resource, "Authorization allowed");
                Ok(PolicyDecision::allow(identity, resource))
            }
            Err(e) => {
                tracing::info!(error = %e, resource, "Token invalid");
                Err(Unauthorized)
            }
        }
    }
}

/// Extract the token from a `bearer <token>` header value.
fn bearer_token(raw_header: &str) -> Option<&str> {
    let mut parts = raw_header.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    Some(token)
}

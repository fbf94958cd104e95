//! JWT token verifier implementation.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use chirp_core::domain::Identity;
use chirp_core::ports::{TokenVerifier, VerificationError};

/// JWT verifier configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Expected `aud` claim.
    pub audience: String,
    /// PEM-encoded public verification key.
    pub public_key_pem: String,
    pub algorithm: Algorithm,
    /// Expected `iss` claim, when issuer checking is wanted.
    pub issuer: Option<String>,
}

impl JwtConfig {
    pub fn new(audience: impl Into<String>, public_key_pem: impl Into<String>) -> Self {
        Self {
            audience: audience.into(),
            public_key_pem: public_key_pem.into(),
            algorithm: Algorithm::RS256,
            issuer: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_issuer(mut self, issuer: Option<String>) -> Self {
        self.issuer = issuer;
        self
    }
}

/// Errors building a verifier from configuration.
#[derive(Debug, thiserror::Error)]
pub enum JwtSetupError {
    #[error("Unsupported algorithm for public-key verification: {0:?}")]
    UnsupportedAlgorithm(Algorithm),

    #[error("Invalid public key: {0}")]
    InvalidKey(String),
}

/// Only the identity claim is read; `exp`, `aud` and `iss` are checked by
/// the validation rules.
#[derive(Debug, Deserialize)]
struct Claims {
    email: Option<String>,
}

/// JWT-based token verifier with a fixed audience and public key.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(config: JwtConfig) -> Result<Self, JwtSetupError> {
        let pem = config.public_key_pem.as_bytes();
        let decoding_key = match config.algorithm {
            Algorithm::RS256
            | Algorithm::RS384
            | Algorithm::RS512
            | Algorithm::PS256
            | Algorithm::PS384
            | Algorithm::PS512 => DecodingKey::from_rsa_pem(pem),
            Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(pem),
            Algorithm::EdDSA => DecodingKey::from_ed_pem(pem),
            other => return Err(JwtSetupError::UnsupportedAlgorithm(other)),
        }
        .map_err(|e| JwtSetupError::InvalidKey(e.to_string()))?;

        let mut validation = Validation::new(config.algorithm);
        validation.set_audience(&[&config.audience]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        tracing::info!(
            algorithm = ?config.algorithm,
            audience = %config.audience,
            issuer = ?config.issuer,
            "JWT verifier configured"
        );

        Ok(Self {
            decoding_key,
            validation,
        })
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<Identity, VerificationError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => VerificationError::Expired,
                ErrorKind::InvalidAudience => VerificationError::AudienceMismatch,
                ErrorKind::InvalidIssuer => VerificationError::IssuerMismatch,
                ErrorKind::InvalidSignature => VerificationError::InvalidSignature,
                ErrorKind::InvalidToken
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::MissingRequiredClaim(_)
                | ErrorKind::Base64(_)
                | ErrorKind::Json(_)
                | ErrorKind::Utf8(_) => VerificationError::Malformed(e.to_string()),
                _ => VerificationError::Other(e.to_string()),
            },
        )?;

        token_data
            .claims
            .email
            .and_then(|email| Identity::parse(email).ok())
            .ok_or(VerificationError::MissingIdentity)
    }
}

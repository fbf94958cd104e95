//! Authentication implementations.

mod jwt;

pub use jsonwebtoken::Algorithm;
pub use jwt::{JwtConfig, JwtSetupError, JwtTokenVerifier};

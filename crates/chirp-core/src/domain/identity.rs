use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identity - the verified principal that owns posts and follow lists.
///
/// In practice this is the `email` claim of a bearer token, but the
/// domain treats it as an opaque, non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Parse an identity, rejecting blank values.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("identity must not be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form for logging, e.g. `a***@example.com`.
    pub fn masked(&self) -> String {
        match self.0.find('@') {
            Some(at_pos) => {
                let (local, domain) = self.0.split_at(at_pos);
                match local.chars().next() {
                    Some(first) if local.chars().count() > 1 => format!("{first}***{domain}"),
                    _ => format!("***{domain}"),
                }
            }
            None => "***".to_string(),
        }
    }
}

impl TryFrom<String> for Identity {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

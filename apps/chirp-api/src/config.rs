//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use chirp_infra::auth::{Algorithm, JwtConfig};

/// Which key-value store backs the post and follow collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Redis,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::Redis => "redis",
        }
    }
}

/// Redis settings. Only read when the Redis backend is selected.
#[derive(Debug, Clone)]
pub struct RedisSettings {
    pub url: String,
    pub connect_timeout: Duration,
    pub key_prefix: String,
    pub fallback_to_memory: bool,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    pub store: StoreBackend,
    pub redis: RedisSettings,
    pub timeline_limit: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        // PEM keys are often passed on one line with literal "\n" separators
        let public_key_pem = required("JWT_PUBLIC_KEY")?.replace("\\n", "\n");

        let algorithm = match lookup("JWT_ALGORITHM") {
            Some(value) => Algorithm::from_str(value.trim()).map_err(|_| ConfigError::Invalid {
                key: "JWT_ALGORITHM",
                value,
            })?,
            None => Algorithm::RS256,
        };

        let jwt = JwtConfig::new(required("JWT_AUDIENCE")?, public_key_pem)
            .with_algorithm(algorithm)
            .with_issuer(lookup("JWT_ISSUER").filter(|v| !v.trim().is_empty()));

        let store = match lookup("STORE_BACKEND").map(|v| v.to_lowercase()) {
            None => StoreBackend::Memory,
            Some(v) if v == "memory" => StoreBackend::Memory,
            Some(v) if v == "redis" => StoreBackend::Redis,
            Some(value) => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value,
                });
            }
        };

        let redis = RedisSettings {
            url: lookup("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(
                lookup("REDIS_CONNECT_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            key_prefix: lookup("REDIS_KEY_PREFIX").unwrap_or_else(|| "chirp".to_string()),
            fallback_to_memory: lookup("REDIS_FALLBACK_TO_MEMORY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            jwt,
            store,
            redis,
            timeline_limit: lookup("TIMELINE_LIMIT")
                .and_then(|s| s.parse().ok())
                .filter(|limit| *limit > 0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("JWT_AUDIENCE", "chirp-client"),
        ("JWT_PUBLIC_KEY", "-----BEGIN PUBLIC KEY-----\\nAAAA\\n-----END PUBLIC KEY-----"),
    ];

    #[test]
    fn test_defaults() {
        let config = load(&REQUIRED).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.jwt.algorithm, Algorithm::RS256);
        assert_eq!(config.jwt.audience, "chirp-client");
        assert_eq!(config.jwt.issuer, None);
        assert_eq!(config.timeline_limit, None);
        assert!(config.redis.fallback_to_memory);
    }

    #[test]
    fn test_public_key_newlines_unescaped() {
        let config = load(&REQUIRED).unwrap();

        assert!(config.jwt.public_key_pem.contains('\n'));
        assert!(!config.jwt.public_key_pem.contains("\\n"));
    }

    #[test]
    fn test_missing_audience_is_error() {
        let result = load(&[REQUIRED[1]]);

        assert!(matches!(result, Err(ConfigError::Missing("JWT_AUDIENCE"))));
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("PORT", "9000"),
            ("JWT_ALGORITHM", "ES256"),
            ("JWT_ISSUER", "https://issuer.example.com/"),
            ("STORE_BACKEND", "Redis"),
            ("REDIS_FALLBACK_TO_MEMORY", "false"),
            ("TIMELINE_LIMIT", "50"),
        ]);

        let config = load(&vars).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.jwt.algorithm, Algorithm::ES256);
        assert_eq!(config.jwt.issuer.as_deref(), Some("https://issuer.example.com/"));
        assert_eq!(config.store, StoreBackend::Redis);
        assert!(!config.redis.fallback_to_memory);
        assert_eq!(config.timeline_limit, Some(50));
    }

    #[test]
    fn test_unknown_backend_and_algorithm_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("STORE_BACKEND", "dynamo"));
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { key: "STORE_BACKEND", .. })
        ));

        let mut vars = REQUIRED.to_vec();
        vars.push(("JWT_ALGORITHM", "none"));
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { key: "JWT_ALGORITHM", .. })
        ));
    }
}

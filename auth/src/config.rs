use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;
use serde::Deserialize;
use thiserror::Error;

use crate::password::PasswordError;

/// Errors raised while validating an [`AuthConfig`].
#[derive(Debug, Clone, Error)]
pub enum AuthConfigError {
    #[error("Signing secret too short: minimum {min} bytes, got {actual}")]
    SecretTooShort { min: usize, actual: usize },

    #[error("Unsupported signing algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),

    #[error("Token time-to-live must be positive, got {0} seconds")]
    InvalidTtl(i64),

    #[error("Invalid password hashing configuration: {0}")]
    Hashing(#[from] PasswordError),
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

/// Configuration surface of the authentication engine.
///
/// The secret has no default and must be supplied by the host process
/// (environment, config file, vault).
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC signing secret
    pub secret: String,

    /// Signing algorithm identifier (HS256, HS384 or HS512)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Default token time-to-live in seconds
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,

    #[serde(default)]
    pub hashing: HashingConfig,
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_token_ttl_secs() -> i64 {
    AuthConfig::DEFAULT_TOKEN_TTL_SECS
}

impl AuthConfig {
    /// 256 bits, the HS256 output size.
    pub const MIN_SECRET_LEN: usize = 32;
    pub const DEFAULT_TOKEN_TTL_SECS: i64 = 30 * 60;

    /// Create a configuration with default algorithm, TTL and hashing cost.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: default_algorithm(),
            token_ttl_secs: Self::DEFAULT_TOKEN_TTL_SECS,
            hashing: HashingConfig::default(),
        }
    }

    /// Set the signing algorithm identifier.
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Set the default token time-to-live.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl_secs = ttl.num_seconds();
        self
    }

    /// Set the Argon2id cost parameters.
    pub fn with_hashing(mut self, hashing: HashingConfig) -> Self {
        self.hashing = hashing;
        self
    }

    /// Default token time-to-live as a duration.
    pub fn token_ttl(&self) -> Duration {
        Duration::seconds(self.token_ttl_secs)
    }

    /// Resolve the configured algorithm identifier.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Unknown identifier or not an HMAC algorithm
    pub fn signing_algorithm(&self) -> Result<Algorithm, AuthConfigError> {
        let algorithm = Algorithm::from_str(self.algorithm.trim())
            .map_err(|_| AuthConfigError::UnsupportedAlgorithm(self.algorithm.clone()))?;

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
            _ => Err(AuthConfigError::UnsupportedAlgorithm(self.algorithm.clone())),
        }
    }

    /// Check every field without building anything.
    ///
    /// # Errors
    /// * `SecretTooShort` - Secret shorter than [`Self::MIN_SECRET_LEN`] bytes
    /// * `UnsupportedAlgorithm` - Algorithm is not HS256/HS384/HS512
    /// * `InvalidTtl` - Default TTL is zero or negative
    pub fn validate(&self) -> Result<(), AuthConfigError> {
        if self.secret.len() < Self::MIN_SECRET_LEN {
            return Err(AuthConfigError::SecretTooShort {
                min: Self::MIN_SECRET_LEN,
                actual: self.secret.len(),
            });
        }

        self.signing_algorithm()?;

        if self.token_ttl_secs <= 0 {
            return Err(AuthConfigError::InvalidTtl(self.token_ttl_secs));
        }

        Ok(())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("hashing", &self.hashing)
            .finish()
    }
}

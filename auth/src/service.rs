use std::sync::Arc;

use chrono::Duration;
use thiserror::Error;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::config::AuthConfig;
use crate::config::AuthConfigError;
use crate::credentials::CredentialError;
use crate::credentials::CredentialStore;
use crate::credentials::InMemoryCredentialStore;
use crate::identity::Identity;
use crate::identity::Username;
use crate::identity::UsernameError;
use crate::password::PasswordHash;
use crate::password::PasswordHasher;
use crate::token::IssuedToken;
use crate::token::TokenIssuer;
use crate::token::TokenValidator;

/// Registration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Password is empty")]
    EmptyPassword,

    #[error("Username already exists: {0}")]
    AlreadyExists(String),

    #[error("Registration failed: {0}")]
    Internal(String),
}

impl From<CredentialError> for RegisterError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::AlreadyExists(username) => RegisterError::AlreadyExists(username),
        }
    }
}

/// Login and token authentication errors.
///
/// Deliberately coarse: callers cannot tell an unknown user from a wrong
/// password, nor a forged token from an expired one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Login failed: {0}")]
    Internal(String),
}

/// Authentication authority: register, login, authenticate.
///
/// Generic over the credential store; [`AuthService::new`] wires the
/// in-memory one. Shareable across threads behind an `Arc`.
pub struct AuthService<S = InMemoryCredentialStore>
where
    S: CredentialStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    issuer: TokenIssuer,
    validator: TokenValidator,
    // Verified against when the username is unknown so both login failures cost one hash.
    decoy_hash: PasswordHash,
}

impl AuthService<InMemoryCredentialStore> {
    /// Create a service with an empty in-memory store and the system clock.
    ///
    /// # Errors
    /// * `AuthConfigError` - Configuration failed validation
    pub fn new(config: &AuthConfig) -> Result<Self, AuthConfigError> {
        Self::with_store(
            config,
            Arc::new(InMemoryCredentialStore::new()),
            Arc::new(SystemClock),
        )
    }
}

impl<S> AuthService<S>
where
    S: CredentialStore,
{
    /// Create a service over an existing store and time source.
    ///
    /// # Arguments
    /// * `config` - Secret, algorithm, default TTL and hashing cost
    /// * `store` - Credential store owning all identities
    /// * `clock` - Time source shared by issuer and validator
    ///
    /// # Errors
    /// * `AuthConfigError` - Configuration failed validation
    pub fn with_store(
        config: &AuthConfig,
        store: Arc<S>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AuthConfigError> {
        let password_hasher = PasswordHasher::with_cost(&config.hashing)?;
        let issuer = TokenIssuer::from_config(config, Arc::clone(&clock))?;
        let validator = TokenValidator::from_config(config, clock)?;
        let decoy_hash = password_hasher.hash("decoy-password")?;

        tracing::debug!(
            algorithm = %config.algorithm,
            token_ttl_secs = config.token_ttl_secs,
            "Auth service configured"
        );

        Ok(Self {
            store,
            password_hasher,
            issuer,
            validator,
            decoy_hash,
        })
    }

    /// Credential store backing this service.
    pub fn credentials(&self) -> &S {
        &self.store
    }

    /// Register a new identity.
    ///
    /// The password is hashed before the store is touched, so the store lock
    /// is never held during hashing.
    ///
    /// # Errors
    /// * `InvalidUsername` - Username is empty
    /// * `EmptyPassword` - Password is empty
    /// * `AlreadyExists` - Username is taken; nothing is modified
    /// * `Internal` - Hashing failed
    pub fn register(&self, username: &str, password: &str) -> Result<(), RegisterError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(RegisterError::EmptyPassword);
        }

        let password_hash = self
            .password_hasher
            .hash(password)
            .map_err(|e| RegisterError::Internal(e.to_string()))?;

        if let Err(e) = self.store.register(username.clone(), password_hash) {
            tracing::debug!(username = %username, "Registration rejected: username taken");
            return Err(e.into());
        }

        tracing::info!(username = %username, "Identity registered");
        Ok(())
    }

    /// Verify credentials and issue a token with the default TTL.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Internal` - Token signing failed
    pub fn login(&self, username: &str, password: &str) -> Result<IssuedToken, LoginError> {
        self.login_with_ttl(username, password, self.issuer.default_ttl())
    }

    /// Verify credentials and issue a token valid for `ttl`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Internal` - Token signing failed
    pub fn login_with_ttl(
        &self,
        username: &str,
        password: &str,
        ttl: Duration,
    ) -> Result<IssuedToken, LoginError> {
        let username = self.verify_credentials(username, password)?;

        let issued = self.issuer.issue(&username, ttl).map_err(|e| {
            tracing::error!(username = %username, error = %e, "Token issuance failed");
            LoginError::Internal(e.to_string())
        })?;

        tracing::info!(
            username = %username,
            expires_at = %issued.expires_at,
            "Token issued"
        );
        Ok(issued)
    }

    /// Validate a bearer token and return its subject.
    ///
    /// # Errors
    /// * `Unauthorized` - Token is forged, malformed, expired or not yet valid
    pub fn authenticate(&self, token: &str) -> Result<Identity, LoginError> {
        self.validator.validate(token).map_err(|reason| {
            tracing::debug!(reason = %reason, "Token rejected");
            LoginError::Unauthorized
        })
    }

    fn verify_credentials(&self, username: &str, password: &str) -> Result<Username, LoginError> {
        let stored_hash = Username::new(username)
            .ok()
            .and_then(|username| self.store.lookup(&username).map(|hash| (username, hash)));

        match stored_hash {
            Some((username, hash)) if self.password_hasher.verify(password, &hash) => Ok(username),
            Some((username, _)) => {
                tracing::debug!(username = %username, "Login rejected");
                Err(LoginError::InvalidCredentials)
            }
            None => {
                self.password_hasher.verify(password, &self.decoy_hash);
                tracing::debug!("Login rejected");
                Err(LoginError::InvalidCredentials)
            }
        }
    }
}

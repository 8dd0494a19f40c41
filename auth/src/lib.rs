//! Authentication authority library
//!
//! Self-contained session/token authentication:
//! - Password hashing (Argon2id)
//! - Credential storage with atomic registration
//! - Signed, time-bounded token issuance and validation (HMAC JWS)
//! - An [`AuthService`] composing them into register / login / authenticate
//!
//! Transport, routing and persistence belong to the caller, which talks to
//! this crate through the three [`AuthService`] operations and treats tokens
//! as opaque bearer strings.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthConfig, AuthService, LoginError};
//!
//! let config = AuthConfig::new("secret_key_at_least_32_bytes_long!");
//! let auth = AuthService::new(&config).unwrap();
//!
//! auth.register("alice", "s3cret!").unwrap();
//!
//! let issued = auth.login("alice", "s3cret!").unwrap();
//! let identity = auth.authenticate(issued.access_token.as_str()).unwrap();
//! assert_eq!(identity.username.as_str(), "alice");
//!
//! assert_eq!(auth.login("alice", "wrong"), Err(LoginError::InvalidCredentials));
//! ```

pub mod clock;
pub mod config;
pub mod credentials;
pub mod identity;
pub mod password;
pub mod service;
pub mod token;

// Re-export commonly used items
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use config::AuthConfig;
pub use config::AuthConfigError;
pub use config::HashingConfig;
pub use credentials::CredentialError;
pub use credentials::CredentialStore;
pub use credentials::InMemoryCredentialStore;
pub use identity::Identity;
pub use identity::Username;
pub use identity::UsernameError;
pub use password::PasswordError;
pub use password::PasswordHash;
pub use password::PasswordHasher;
pub use service::AuthService;
pub use service::LoginError;
pub use service::RegisterError;
pub use token::IssuedToken;
pub use token::Token;
pub use token::TokenClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenValidator;

use thiserror::Error;

/// Error type for credential store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Username already exists: {0}")]
    AlreadyExists(String),
}

use auth::Username;
use thiserror::Error;

/// Caller identity established from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: Username,
}

/// Session verification failure. Carries no reason.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unauthorized")]
    Unauthorized,
}

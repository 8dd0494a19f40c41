use thiserror::Error;

/// Error type for token operations.
///
/// Messages name the category only; the offending token is never echoed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token payload is malformed")]
    Malformed,

    #[error("Token is expired")]
    Expired,

    #[error("Token is not yet valid")]
    NotYetValid,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

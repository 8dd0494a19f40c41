use crate::domain::session::models::AuthenticatedUser;
use crate::domain::session::models::SessionError;

/// Turns a bearer token into the caller's identity.
pub trait SessionVerifier: Send + Sync + 'static {
    /// Verify a bearer token.
    ///
    /// # Arguments
    /// * `token` - Opaque bearer token as presented by the caller
    ///
    /// # Returns
    /// The authenticated caller
    ///
    /// # Errors
    /// * `Unauthorized` - Token is missing, forged, malformed or expired
    fn verify(&self, token: &str) -> Result<AuthenticatedUser, SessionError>;
}

use std::sync::Arc;

use auth::AuthService;
use auth::CredentialStore;

use crate::domain::session::AuthenticatedUser;
use crate::domain::session::SessionError;
use crate::domain::session::SessionVerifier;

/// Session verification backed by the authentication authority.
pub struct AuthSessionVerifier<S>
where
    S: CredentialStore,
{
    auth_service: Arc<AuthService<S>>,
}

impl<S> AuthSessionVerifier<S>
where
    S: CredentialStore,
{
    pub fn new(auth_service: Arc<AuthService<S>>) -> Self {
        Self { auth_service }
    }
}

impl<S> SessionVerifier for AuthSessionVerifier<S>
where
    S: CredentialStore,
{
    fn verify(&self, token: &str) -> Result<AuthenticatedUser, SessionError> {
        self.auth_service
            .authenticate(token)
            .map(|identity| AuthenticatedUser {
                username: identity.username,
            })
            .map_err(|_| SessionError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use auth::AuthConfig;
    use auth::HashingConfig;

    use super::*;

    #[test]
    fn test_verify_delegates_to_auth_service() {
        let config = AuthConfig::new("test_secret_key_at_least_32_bytes!").with_hashing(
            HashingConfig {
                memory_kib: 64,
                iterations: 1,
                parallelism: 1,
            },
        );
        let auth_service = Arc::new(AuthService::new(&config).unwrap());
        auth_service.register("alice", "s3cret!").unwrap();
        let issued = auth_service.login("alice", "s3cret!").unwrap();

        let verifier = AuthSessionVerifier::new(auth_service);

        let user = verifier.verify(issued.access_token.as_str()).unwrap();
        assert_eq!(user.username.as_str(), "alice");
        assert_eq!(verifier.verify("garbage"), Err(SessionError::Unauthorized));
    }
}

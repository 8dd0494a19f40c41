use std::sync::Arc;

use chrono::Duration;
use chrono::SubsecRound;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::TokenClaims;
use super::errors::TokenError;
use super::models::IssuedToken;
use super::models::Token;
use crate::clock::Clock;
use crate::config::AuthConfig;
use crate::config::AuthConfigError;
use crate::identity::Username;

/// Signs time-bounded tokens with the process-wide secret.
///
/// Output depends only on subject, secret, algorithm and the clock reading.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Create a new issuer.
    ///
    /// # Arguments
    /// * `secret` - HMAC secret (should be at least 32 bytes)
    /// * `algorithm` - HMAC algorithm used to sign
    /// * `default_ttl` - TTL applied by [`Self::issue_default`]
    /// * `clock` - Time source for `iat`/`exp`
    pub fn new(
        secret: &[u8],
        algorithm: Algorithm,
        default_ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm,
            default_ttl,
            clock,
        }
    }

    /// Build an issuer from validated configuration.
    ///
    /// # Errors
    /// * `AuthConfigError` - Configuration failed validation
    pub fn from_config(config: &AuthConfig, clock: Arc<dyn Clock>) -> Result<Self, AuthConfigError> {
        config.validate()?;

        Ok(Self::new(
            config.secret.as_bytes(),
            config.signing_algorithm()?,
            config.token_ttl(),
            clock,
        ))
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a token for `subject` valid for `ttl` from now.
    ///
    /// A zero or negative `ttl` yields a token that is already expired.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry out of range or signing failed
    pub fn issue(&self, subject: &Username, ttl: Duration) -> Result<IssuedToken, TokenError> {
        // Token timestamps are whole seconds; keep IssuedToken consistent with them.
        let now = self.clock.now().trunc_subsecs(0);

        let claims = TokenClaims::new(subject, now, ttl)
            .ok_or_else(|| TokenError::EncodingFailed("expiry out of range".to_string()))?;
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| TokenError::EncodingFailed("expiry out of range".to_string()))?;

        let header = Header::new(self.algorithm);
        let access_token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            access_token: Token::new(access_token),
            token_type: IssuedToken::TOKEN_TYPE,
            issued_at: now,
            expires_at,
        })
    }

    /// Issue a token with the configured default TTL.
    pub fn issue_default(&self, subject: &Username) -> Result<IssuedToken, TokenError> {
        self.issue(subject, self.default_ttl)
    }
}

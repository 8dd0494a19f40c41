use std::sync::Arc;

use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::errors::TokenError;
use crate::clock::Clock;
use crate::config::AuthConfig;
use crate::config::AuthConfigError;
use crate::identity::Identity;
use crate::identity::Username;

/// Verifies tokens produced by a [`super::TokenIssuer`] sharing the same secret.
///
/// Stateless: validity is decided from the token, the secret and the clock.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenValidator {
    /// Create a new validator.
    ///
    /// Only tokens whose header names `algorithm` are accepted.
    pub fn new(secret: &[u8], algorithm: Algorithm, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(algorithm);
        // Expiry is checked against our own clock, with no leeway.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            clock,
        }
    }

    /// Build a validator from validated configuration.
    ///
    /// # Errors
    /// * `AuthConfigError` - Configuration failed validation
    pub fn from_config(config: &AuthConfig, clock: Arc<dyn Clock>) -> Result<Self, AuthConfigError> {
        config.validate()?;

        Ok(Self::new(
            config.secret.as_bytes(),
            config.signing_algorithm()?,
            clock,
        ))
    }

    /// Validate a token and extract its subject.
    ///
    /// Checks run in order: structure and signature, payload (including a
    /// non-blank subject), time window.
    ///
    /// # Errors
    /// * `InvalidSignature` - Not a well-formed token or the MAC does not verify
    /// * `Malformed` - Signed payload lacks or mistypes a required field
    /// * `Expired` - Current time is at or past `exp`
    /// * `NotYetValid` - Current time is before `iat`
    pub fn validate(&self, token: &str) -> Result<Identity, TokenError> {
        let claims = self.verified_claims(token)?;
        let username = Username::new(claims.sub.as_str()).map_err(|_| TokenError::Malformed)?;

        let now = self.clock.now().timestamp();
        if claims.is_expired(now) {
            return Err(TokenError::Expired);
        }
        if claims.is_premature(now) {
            return Err(TokenError::NotYetValid);
        }

        Ok(Identity::new(username))
    }

    /// Verify structure and MAC, then decode the payload. No time checks.
    pub fn verified_claims(&self, token: &str) -> Result<TokenClaims, TokenError> {
        // A header that does not parse is a structural failure, not a payload one.
        decode_header(token).map_err(|_| TokenError::InvalidSignature)?;

        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::Json(_)
                | ErrorKind::Base64(_)
                | ErrorKind::Utf8(_)
                | ErrorKind::MissingRequiredClaim(_) => TokenError::Malformed,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                _ => TokenError::InvalidSignature,
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use chrono::Duration;
    use jsonwebtoken::encode;
    use jsonwebtoken::EncodingKey;
    use jsonwebtoken::Header;
    use serde_json::json;

    use super::*;
    use crate::clock::ManualClock;
    use crate::token::TokenIssuer;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";
    const START: i64 = 1_700_000_000;

    fn fixture() -> (Arc<ManualClock>, TokenIssuer, TokenValidator) {
        let clock = Arc::new(ManualClock::new(DateTime::from_timestamp(START, 0).unwrap()));
        let issuer = TokenIssuer::new(SECRET, Algorithm::HS256, Duration::minutes(30), clock.clone());
        let validator = TokenValidator::new(SECRET, Algorithm::HS256, clock.clone());
        (clock, issuer, validator)
    }

    fn alice() -> Username {
        Username::new("alice").unwrap()
    }

    fn sign_raw(payload: serde_json::Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[test]
    fn test_validate_fresh_token() {
        let (_, issuer, validator) = fixture();
        let issued = issuer.issue_default(&alice()).unwrap();

        let identity = validator.validate(issued.access_token.as_str()).unwrap();
        assert_eq!(identity.username, alice());
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let (_, issuer, validator) = fixture();
        let issued = issuer.issue(&alice(), Duration::zero()).unwrap();

        assert_eq!(
            validator.validate(issued.access_token.as_str()),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let (_, issuer, validator) = fixture();
        let issued = issuer.issue(&alice(), Duration::seconds(-10)).unwrap();

        assert_eq!(
            validator.validate(issued.access_token.as_str()),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_expiry_boundary_has_no_grace() {
        let (clock, issuer, validator) = fixture();
        let issued = issuer.issue(&alice(), Duration::minutes(30)).unwrap();
        let token = issued.access_token.as_str();

        clock.advance(Duration::minutes(30) - Duration::seconds(1));
        assert!(validator.validate(token).is_ok());

        clock.advance(Duration::seconds(1));
        assert_eq!(validator.validate(token), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_before_issuance_is_rejected() {
        let (clock, issuer, validator) = fixture();
        let issued = issuer.issue_default(&alice()).unwrap();

        clock.advance(Duration::seconds(-1));
        assert_eq!(
            validator.validate(issued.access_token.as_str()),
            Err(TokenError::NotYetValid)
        );
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let (_, issuer, validator) = fixture();
        let token = issuer.issue_default(&alice()).unwrap().access_token.into_string();

        let (message, signature) = token.rsplit_once('.').unwrap();
        for position in 0..signature.len() {
            let mut bytes = signature.as_bytes().to_vec();
            bytes[position] = if bytes[position] == b'A' { b'B' } else { b'A' };
            let tampered = format!("{}.{}", message, String::from_utf8(bytes).unwrap());

            assert_eq!(
                validator.validate(&tampered),
                Err(TokenError::InvalidSignature),
                "tampered byte {} was accepted",
                position
            );
        }
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let (_, issuer, validator) = fixture();
        let token = issuer.issue_default(&alice()).unwrap().access_token.into_string();

        let parts: Vec<&str> = token.split('.').collect();
        let forged_payload = sign_raw(json!({"sub": "mallory", "iat": START, "exp": START + 60}));
        let forged_payload = forged_payload.split('.').nth(1).unwrap();
        let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert_eq!(validator.validate(&forged), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let (clock, issuer, _) = fixture();
        let other = TokenValidator::new(b"another_secret_key_at_least_32_bytes", Algorithm::HS256, clock);
        let issued = issuer.issue_default(&alice()).unwrap();

        assert_eq!(
            other.validate(issued.access_token.as_str()),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_algorithm_mismatch_is_rejected() {
        let (clock, _, validator) = fixture();
        let issuer = TokenIssuer::new(SECRET, Algorithm::HS512, Duration::minutes(30), clock);
        let issued = issuer.issue_default(&alice()).unwrap();

        assert_eq!(
            validator.validate(issued.access_token.as_str()),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_garbage_is_invalid_signature() {
        let (_, _, validator) = fixture();

        for garbage in ["", "invalid.token.here", "no-dots", "a.b", "a.b.c.d"] {
            assert_eq!(
                validator.validate(garbage),
                Err(TokenError::InvalidSignature),
                "{:?}",
                garbage
            );
        }
    }

    #[test]
    fn test_signed_payload_with_wrong_types_is_malformed() {
        let (_, _, validator) = fixture();
        let token = sign_raw(json!({"sub": 42, "iat": START, "exp": START + 60}));

        assert_eq!(validator.validate(&token), Err(TokenError::Malformed));
    }

    #[test]
    fn test_signed_payload_missing_fields_is_malformed() {
        let (_, _, validator) = fixture();

        let no_exp = sign_raw(json!({"sub": "alice", "iat": START}));
        assert_eq!(validator.validate(&no_exp), Err(TokenError::Malformed));

        let no_sub = sign_raw(json!({"iat": START, "exp": START + 60}));
        assert_eq!(validator.validate(&no_sub), Err(TokenError::Malformed));
    }

    #[test]
    fn test_signed_blank_subject_is_malformed() {
        let (_, _, validator) = fixture();
        let token = sign_raw(json!({"sub": "", "iat": START, "exp": START + 60}));

        assert_eq!(validator.validate(&token), Err(TokenError::Malformed));
    }

    #[test]
    fn test_blank_subject_reported_before_time_window() {
        let (_, _, validator) = fixture();
        let expired = sign_raw(json!({"sub": "", "iat": START - 120, "exp": START - 60}));
        let premature = sign_raw(json!({"sub": " ", "iat": START + 60, "exp": START + 120}));

        assert_eq!(validator.validate(&expired), Err(TokenError::Malformed));
        assert_eq!(validator.validate(&premature), Err(TokenError::Malformed));
    }
}

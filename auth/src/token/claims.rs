use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token payload.
///
/// Every field is required: a token missing any of them does not decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims for `subject`, valid from `issued_at` for `ttl`.
    ///
    /// Returns `None` when the expiry falls outside the representable range.
    pub fn new(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(ttl)?;

        Some(Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Check if token is expired.
    ///
    /// The expiry instant itself is already outside the validity window.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Check if token is used before it was issued.
    pub fn is_premature(&self, current_timestamp: i64) -> bool {
        current_timestamp < self.iat
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).unwrap()
    }

    #[test]
    fn test_new_claims() {
        let claims = TokenClaims::new("alice", at(1_000), Duration::minutes(30)).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.iat, 1_000);
        assert_eq!(claims.exp, 1_000 + 30 * 60);
        assert_eq!(claims.expires_at(), Some(at(2_800)));
    }

    #[test]
    fn test_is_expired() {
        let claims = TokenClaims::new("alice", at(900), Duration::seconds(100)).unwrap();

        assert!(!claims.is_expired(999)); // Not expired
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }

    #[test]
    fn test_zero_ttl_is_expired_immediately() {
        let claims = TokenClaims::new("alice", at(1_000), Duration::zero()).unwrap();
        assert!(claims.is_expired(1_000));
    }

    #[test]
    fn test_is_premature() {
        let claims = TokenClaims::new("alice", at(1_000), Duration::seconds(60)).unwrap();

        assert!(claims.is_premature(999));
        assert!(!claims.is_premature(1_000));
    }

    #[test]
    fn test_ttl_overflow() {
        assert!(TokenClaims::new("alice", DateTime::<Utc>::MAX_UTC, Duration::days(1)).is_none());
    }
}

use std::fmt;

use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username is empty")]
    Empty,
}

/// Username value type
///
/// Any non-blank string is accepted. Stored exactly as given, so "Alice" and
/// "alice" are distinct identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Returns
    /// Validated Username value object
    ///
    /// # Errors
    /// * `Empty` - Username is empty or whitespace only
    pub fn new(username: impl Into<String>) -> Result<Self, UsernameError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The subject of a successfully validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: Username,
}

impl Identity {
    pub fn new(username: Username) -> Self {
        Self { username }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_non_blank() {
        let username = Username::new("alice").expect("valid username");
        assert_eq!(username.as_str(), "alice");
        assert_eq!(username.to_string(), "alice");
    }

    #[test]
    fn test_username_rejects_empty_and_blank() {
        assert_eq!(Username::new(""), Err(UsernameError::Empty));
        assert_eq!(Username::new("   "), Err(UsernameError::Empty));
    }

    #[test]
    fn test_username_is_case_sensitive() {
        let upper = Username::new("Alice").unwrap();
        let lower = Username::new("alice").unwrap();
        assert_ne!(upper, lower);
    }
}

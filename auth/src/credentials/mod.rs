pub mod errors;
pub mod memory;

pub use errors::CredentialError;
pub use memory::InMemoryCredentialStore;

use crate::identity::Username;
use crate::password::PasswordHash;

/// Owner of every registered identity and its password hash.
///
/// Implementations must make `register` an atomic check-then-insert: two
/// concurrent registrations of the same username never both succeed.
pub trait CredentialStore: Send + Sync + 'static {
    /// Insert a new identity.
    ///
    /// # Errors
    /// * `AlreadyExists` - Username is taken; the store is left untouched
    fn register(&self, username: Username, password_hash: PasswordHash)
        -> Result<(), CredentialError>;

    /// Fetch the stored hash for `username`, if registered.
    fn lookup(&self, username: &Username) -> Option<PasswordHash>;

    /// Number of registered identities.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, username: &Username) -> bool {
        self.lookup(username).is_some()
    }
}

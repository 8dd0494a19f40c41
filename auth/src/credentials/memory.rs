use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;

use super::CredentialError;
use super::CredentialStore;
use crate::identity::Username;
use crate::password::PasswordHash;

/// Process-local credential store.
///
/// Writers take the lock exclusively for the duration of the
/// check-then-insert only; lookups share it. A poisoned lock is recovered
/// since no write leaves the map half-updated.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    entries: RwLock<HashMap<Username, PasswordHash>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn register(
        &self,
        username: Username,
        password_hash: PasswordHash,
    ) -> Result<(), CredentialError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        match entries.entry(username) {
            Entry::Occupied(entry) => Err(CredentialError::AlreadyExists(entry.key().to_string())),
            Entry::Vacant(entry) => {
                entry.insert(password_hash);
                Ok(())
            }
        }
    }

    fn lookup(&self, username: &Username) -> Option<PasswordHash> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(username)
            .cloned()
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

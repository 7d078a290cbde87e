//! Persistent token storage

use std::collections::HashMap;
use std::sync::Mutex;

use keyring::{Entry, Error as KeyringError};
use recruitbot_domain::Result;
use tracing::debug;

use crate::errors::InfraError;

use super::types::TokenSet;

/// Keychain service name under which token entries are filed.
const KEYCHAIN_SERVICE: &str = "com.recruitbot.oauth";

/// Abstraction over where serialized tokens live.
///
/// Production uses the OS keychain; tests use an in-memory map.
pub trait TokenStorage: Send + Sync {
    fn load(&self, account: &str) -> Result<Option<TokenSet>>;
    fn save(&self, account: &str, tokens: &TokenSet) -> Result<()>;
    fn clear(&self, account: &str) -> Result<()>;
}

/// Token storage backed by the operating system keychain.
#[derive(Debug, Default)]
pub struct KeyringTokenStore;

impl KeyringTokenStore {
    fn entry(&self, account: &str) -> Result<Entry> {
        Entry::new(KEYCHAIN_SERVICE, account)
            .map_err(InfraError::from)
            .map_err(Into::into)
    }
}

impl TokenStorage for KeyringTokenStore {
    fn load(&self, account: &str) -> Result<Option<TokenSet>> {
        let entry = self.entry(account)?;
        match entry.get_password() {
            Ok(raw) => {
                let tokens = serde_json::from_str(&raw).map_err(InfraError::from)?;
                Ok(Some(tokens))
            }
            Err(KeyringError::NoEntry) => Ok(None),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }

    fn save(&self, account: &str, tokens: &TokenSet) -> Result<()> {
        let entry = self.entry(account)?;
        let raw = serde_json::to_string(tokens).map_err(InfraError::from)?;
        entry.set_password(&raw).map_err(InfraError::from)?;
        debug!(account = %account, "stored tokens in keychain");
        Ok(())
    }

    fn clear(&self, account: &str) -> Result<()> {
        let entry = self.entry(account)?;
        match entry.delete_credential() {
            Ok(()) | Err(KeyringError::NoEntry) => Ok(()),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }
}

/// In-memory token storage for tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, TokenSet>>,
}

impl MemoryTokenStore {
    pub fn with_tokens(account: &str, tokens: TokenSet) -> Self {
        let store = Self::default();
        store.entries_mut().insert(account.to_string(), tokens);
        store
    }

    /// A poisoned lock only means a panicked test thread; the map itself is
    /// still usable, so recover the guard instead of panicking again.
    fn entries_mut(&self) -> std::sync::MutexGuard<'_, HashMap<String, TokenSet>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStorage for MemoryTokenStore {
    fn load(&self, account: &str) -> Result<Option<TokenSet>> {
        Ok(self.entries_mut().get(account).cloned())
    }

    fn save(&self, account: &str, tokens: &TokenSet) -> Result<()> {
        self.entries_mut().insert(account.to_string(), tokens.clone());
        Ok(())
    }

    fn clear(&self, account: &str) -> Result<()> {
        self.entries_mut().remove(account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_tokens() {
        let store = MemoryTokenStore::default();
        let tokens = TokenSet::new("access", Some("refresh".to_string()), 3600);

        assert!(store.load("main").unwrap().is_none());
        store.save("main", &tokens).unwrap();
        assert_eq!(store.load("main").unwrap(), Some(tokens));

        store.clear("main").unwrap();
        assert!(store.load("main").unwrap().is_none());
    }

    #[test]
    fn accounts_are_isolated() {
        let store = MemoryTokenStore::with_tokens("a", TokenSet::new("t", None, 3600));
        assert!(store.load("b").unwrap().is_none());
        assert!(store.load("a").unwrap().is_some());
    }
}

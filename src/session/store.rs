use anyhow::Result;
use async_trait::async_trait;
use solana_program::pubkey::Pubkey;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::session::model::WalletSession;

/// Passkey credential backend. The real dashboard talks to the browser
/// credential API; tests and the CLI use the mock.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn create(&self) -> Result<String>;
    async fn get(&self) -> Result<String>;
}

/// Injected session persistence, a narrow key-value surface keyed by wallet.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, wallet: &Pubkey) -> Result<Option<WalletSession>>;
    async fn save(&self, session: &WalletSession) -> Result<()>;
    async fn delete(&self, wallet: &Pubkey) -> Result<()>;
}

pub const MOCK_CREDENTIAL_ID: &str = "mock-credential-id";

/// Demo credential store: always yields the same credential id.
pub struct MockCredentialStore;

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn create(&self) -> Result<String> {
        debug!("creating new credential");
        Ok(MOCK_CREDENTIAL_ID.to_string())
    }

    async fn get(&self) -> Result<String> {
        debug!("getting credential");
        Ok(MOCK_CREDENTIAL_ID.to_string())
    }
}

/// In-memory session store.
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<Pubkey, WalletSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, wallet: &Pubkey) -> Result<Option<WalletSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(wallet).cloned())
    }

    async fn save(&self, session: &WalletSession) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.wallet, session.clone());
        Ok(())
    }

    async fn delete(&self, wallet: &Pubkey) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(wallet);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn memory_store_round_trip() {
        tokio_test::block_on(async {
            let store = MemorySessionStore::new();
            let wallet =
                Pubkey::from_str("5YNmS1R9nNSCDzb5a7mMJ1dwK9uHeAAF4CmPEwKgVWr8").unwrap();

            assert!(store.load(&wallet).await.unwrap().is_none());

            let session = WalletSession::new(wallet);
            store.save(&session).await.unwrap();
            assert_eq!(store.load(&wallet).await.unwrap(), Some(session.clone()));
            assert_eq!(store.len().await, 1);

            // Saving again overwrites rather than duplicating.
            store.save(&session).await.unwrap();
            assert_eq!(store.len().await, 1);

            store.delete(&wallet).await.unwrap();
            assert!(store.load(&wallet).await.unwrap().is_none());
        });
    }

    #[test]
    fn mock_credentials_are_stable() {
        tokio_test::block_on(async {
            let store = MockCredentialStore;
            assert_eq!(store.create().await.unwrap(), MOCK_CREDENTIAL_ID);
            assert_eq!(store.get().await.unwrap(), MOCK_CREDENTIAL_ID);
        });
    }
}

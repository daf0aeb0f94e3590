use anyhow::Result;
use solana_program::pubkey::Pubkey;
use std::sync::Arc;
use tracing::{debug, info};

use crate::session::model::{ConnectStage, WalletSession};
use crate::session::store::{CredentialStore, SessionStore};

/// Walks wallet sessions through the connect stages and persists them via
/// the injected store.
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    credentials: Arc<dyn CredentialStore>,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self { store, credentials }
    }

    /// Connect a wallet: authenticate against the credential store, walk the
    /// stages, persist the connected session. A wallet that is already
    /// connected is resumed as-is.
    pub async fn connect(&self, wallet: Pubkey) -> Result<WalletSession> {
        if let Some(existing) = self.store.load(&wallet).await? {
            if existing.is_connected() {
                debug!(wallet = %wallet, "resuming existing session");
                return Ok(existing);
            }
        }

        let mut session = WalletSession::new(wallet);

        session.advance(ConnectStage::Authenticating)?;
        info!(wallet = %wallet, stage = %session.stage, "requesting passkey credential");
        let credential_id = self.credentials.get().await?;
        session.credential_id = Some(credential_id);

        session.advance(ConnectStage::Connecting)?;
        info!(wallet = %wallet, stage = %session.stage, "establishing session");

        session.advance(ConnectStage::Connected)?;
        self.store.save(&session).await?;
        info!(wallet = %wallet, session_id = %session.id, "wallet connected");

        Ok(session)
    }

    /// Restore a previously persisted session, if any.
    pub async fn restore(&self, wallet: &Pubkey) -> Result<Option<WalletSession>> {
        self.store.load(wallet).await
    }

    pub async fn disconnect(&self, wallet: &Pubkey) -> Result<()> {
        if let Some(mut session) = self.store.load(wallet).await? {
            session.advance(ConnectStage::Disconnected)?;
            self.store.delete(wallet).await?;
            info!(wallet = %wallet, "wallet disconnected");
        }
        Ok(())
    }
}

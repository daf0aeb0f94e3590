use chrono::{DateTime, Utc};
use solana_program::pubkey::Pubkey;
use uuid::Uuid;

use crate::session::SessionError;

/// Wallet-connection stages. Transitions are driven by explicit caller
/// calls, never by timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectStage {
    Idle,
    Authenticating,
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectStage {
    /// Legal transitions: the connect walk in order, plus an abort to
    /// `Disconnected` from any non-idle stage.
    pub fn can_advance_to(self, next: ConnectStage) -> bool {
        use ConnectStage::*;
        matches!(
            (self, next),
            (Idle, Authenticating)
                | (Authenticating, Connecting)
                | (Connecting, Connected)
                | (Authenticating, Disconnected)
                | (Connecting, Disconnected)
                | (Connected, Disconnected)
        )
    }
}

impl std::fmt::Display for ConnectStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectStage::Idle => write!(f, "idle"),
            ConnectStage::Authenticating => write!(f, "authenticating"),
            ConnectStage::Connecting => write!(f, "connecting"),
            ConnectStage::Connected => write!(f, "connected"),
            ConnectStage::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// An explicit session object passed to anything needing identity; replaces
/// any notion of a process-global "current wallet".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSession {
    pub id: Uuid,
    pub wallet: Pubkey,
    pub stage: ConnectStage,
    pub credential_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WalletSession {
    pub fn new(wallet: Pubkey) -> Self {
        Self {
            id: Uuid::new_v4(),
            wallet,
            stage: ConnectStage::Idle,
            credential_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn advance(&mut self, next: ConnectStage) -> Result<(), SessionError> {
        if !self.stage.can_advance_to(next) {
            return Err(SessionError::InvalidTransition {
                from: self.stage,
                to: next,
            });
        }
        self.stage = next;
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.stage == ConnectStage::Connected
    }
}

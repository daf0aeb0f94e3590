use anyhow::Result;
use async_trait::async_trait;
use solana_program::pubkey::Pubkey;

use crate::models::{Holding, LiveQuote, PricingTable, QuoteResult, TradeRequest, UnsignedSwapTransaction};

/// Supplies a wallet's current holdings. A fetch error means "no data" and
/// must propagate; it is never an empty portfolio.
#[async_trait]
pub trait HoldingsProvider: Send + Sync {
    /// Provider name, for logs.
    fn name(&self) -> &str;

    async fn holdings(&self, wallet: &Pubkey) -> Result<Vec<Holding>>;
}

/// Supplies the pricing table the local quote calculator works from. Every
/// mint referenced by a trade request must have an entry or the calculator
/// fails with `UnknownToken`.
#[async_trait]
pub trait PricingProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn pricing_table(&self) -> Result<PricingTable>;
}

/// External quote endpoint. When configured, its result supersedes the local
/// calculator; the local path remains as the estimate/fallback.
#[async_trait]
pub trait LiveQuoteService: Send + Sync {
    fn name(&self) -> &str;

    async fn live_quote(&self, request: &TradeRequest) -> Result<LiveQuote>;
}

/// Turns a finalized quote into a serialized, unsigned transaction payload.
/// Signing happens out-of-band with the caller's passkey.
#[async_trait]
pub trait SwapExecutor: Send + Sync {
    async fn prepare_swap(
        &self,
        quote: &QuoteResult,
        wallet: &Pubkey,
    ) -> Result<UnsignedSwapTransaction>;
}

/// Provider error type
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Unsupported quote: {0}")]
    UnsupportedQuote(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(err.to_string())
        } else if err.is_connect() {
            ProviderError::ConnectionFailed(err.to_string())
        } else {
            ProviderError::Internal(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::InvalidResponse(err.to_string())
    }
}

impl From<base64::DecodeError> for ProviderError {
    fn from(err: base64::DecodeError) -> Self {
        ProviderError::InvalidResponse(err.to_string())
    }
}

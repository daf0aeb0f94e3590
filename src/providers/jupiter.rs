use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use solana_program::pubkey::Pubkey;
use tokio::time::{timeout, Duration};

use crate::config::QuoteServiceConfig;
use crate::engine::DEFAULT_SLIPPAGE_BPS;
use crate::models::{LiveQuote, QuoteResult, TradeRequest, UnsignedSwapTransaction};
use crate::providers::interface::{LiveQuoteService, ProviderError, SwapExecutor};

/// Client for the external swap-quote service (Jupiter-shaped API): a GET
/// `/quote` endpoint and a POST `/swap` endpoint that returns an unsigned,
/// base64-encoded transaction. No retries; a failure surfaces to the caller,
/// which falls back to the local estimate.
pub struct JupiterClient {
    client: Client,
    base_url: String,
    timeout_seconds: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SwapResponse {
    swap_transaction: String,
}

impl JupiterClient {
    pub fn new(config: &QuoteServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    fn quote_url(&self, request: &TradeRequest) -> String {
        format!(
            "{}/quote?inputMint={}&outputMint={}&amount={}&slippageBps={}",
            self.base_url,
            request.source_mint,
            request.destination_mint,
            request.input_amount,
            request.slippage_bps.unwrap_or(DEFAULT_SLIPPAGE_BPS),
        )
    }

    fn swap_request_body(quote: &LiveQuote, wallet: &Pubkey) -> Value {
        json!({
            "quoteResponse": quote,
            "userPublicKey": wallet.to_string(),
        })
    }

    async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = timeout(
            Duration::from_secs(self.timeout_seconds),
            self.client.get(url).send(),
        )
        .await
        .map_err(|_| ProviderError::Timeout(url.to_string()))??;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ProviderError::InvalidResponse(format!(
                "HTTP {}: {}",
                status,
                response.text().await?
            ))
            .into());
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

#[async_trait]
impl LiveQuoteService for JupiterClient {
    fn name(&self) -> &str {
        "jupiter"
    }

    async fn live_quote(&self, request: &TradeRequest) -> Result<LiveQuote> {
        let url = self.quote_url(request);
        self.get_json(&url).await
    }
}

#[async_trait]
impl SwapExecutor for JupiterClient {
    async fn prepare_swap(
        &self,
        quote: &QuoteResult,
        wallet: &Pubkey,
    ) -> Result<UnsignedSwapTransaction> {
        let live = match quote {
            QuoteResult::Live(live) => live,
            QuoteResult::Local(_) => {
                return Err(ProviderError::UnsupportedQuote(
                    "local estimates cannot be sent to the swap endpoint".to_string(),
                )
                .into())
            }
        };

        let url = format!("{}/swap", self.base_url);
        let response = timeout(
            Duration::from_secs(self.timeout_seconds),
            self.client
                .post(&url)
                .json(&Self::swap_request_body(live, wallet))
                .send(),
        )
        .await
        .map_err(|_| ProviderError::Timeout(url.clone()))??;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ProviderError::InvalidResponse(format!(
                "HTTP {}: {}",
                status,
                response.text().await?
            ))
            .into());
        }

        let swap: SwapResponse = response.json().await?;
        let transaction =
            UnsignedSwapTransaction::from_base64(&swap.swap_transaction).map_err(ProviderError::from)?;
        Ok(transaction)
    }
}

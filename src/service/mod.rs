use anyhow::Result;
use rust_decimal::Decimal;
use solana_program::pubkey::Pubkey;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::engine::{summarize, EngineError, QuoteCalculator};
use crate::models::{
    Holding, PortfolioSummary, QuoteResult, TradeRequest, UnsignedSwapTransaction,
};
use crate::providers::{
    HoldingsProvider, JupiterClient, LiveQuoteService, MockHoldingsProvider, MockSwapExecutor,
    PricingProvider, StaticPricingProvider, SwapExecutor,
};

/// A wallet's holdings plus the computed aggregate statistics.
#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub holdings: Vec<Holding>,
    pub summary: PortfolioSummary,
}

/// Ties the providers and the valuation/quote engine together for a UI.
pub struct Dashboard {
    holdings: Arc<dyn HoldingsProvider>,
    pricing: Arc<dyn PricingProvider>,
    live_quotes: Option<Arc<dyn LiveQuoteService>>,
    executor: Arc<dyn SwapExecutor>,
    calculator: QuoteCalculator,
}

impl Dashboard {
    pub fn new(
        holdings: Arc<dyn HoldingsProvider>,
        pricing: Arc<dyn PricingProvider>,
        live_quotes: Option<Arc<dyn LiveQuoteService>>,
        executor: Arc<dyn SwapExecutor>,
        calculator: QuoteCalculator,
    ) -> Self {
        Self {
            holdings,
            pricing,
            live_quotes,
            executor,
            calculator,
        }
    }

    /// Demo wiring: mock holdings and static pricing, with the live quote
    /// service attached when configuration enables it.
    pub fn demo(config: &AppConfig) -> Result<Self> {
        let (live_quotes, executor): (Option<Arc<dyn LiveQuoteService>>, Arc<dyn SwapExecutor>) =
            if config.is_quote_service_enabled() {
                let client = Arc::new(JupiterClient::new(&config.quote_service)?);
                (Some(client.clone()), client)
            } else {
                (None, Arc::new(MockSwapExecutor))
            };

        Ok(Self::new(
            Arc::new(MockHoldingsProvider),
            Arc::new(StaticPricingProvider::demo()),
            live_quotes,
            executor,
            QuoteCalculator::from_config(&config.engine),
        ))
    }

    /// Fetch a wallet's holdings and compute the summary. Provider failures
    /// propagate as "no data"; they are never rendered as an empty portfolio.
    pub async fn portfolio(&self, wallet: &Pubkey) -> Result<PortfolioView> {
        let holdings = self.holdings.holdings(wallet).await?;
        info!(
            provider = self.holdings.name(),
            count = holdings.len(),
            "fetched holdings"
        );

        let summary = summarize(&holdings)?;
        for warning in &summary.warnings {
            warn!(%warning, "valuation warning");
        }

        Ok(PortfolioView { holdings, summary })
    }

    /// Resolve user-facing token references (symbol or mint) into a trade
    /// request against the current pricing table.
    pub async fn build_trade_request(
        &self,
        source: &str,
        destination: &str,
        input_amount: Decimal,
        slippage_bps: Option<u32>,
    ) -> Result<TradeRequest> {
        let pricing = self.pricing.pricing_table().await?;
        let source_mint = pricing
            .resolve(source)
            .ok_or_else(|| EngineError::UnknownToken(source.to_string()))?
            .mint
            .clone();
        let destination_mint = pricing
            .resolve(destination)
            .ok_or_else(|| EngineError::UnknownToken(destination.to_string()))?
            .mint
            .clone();

        let mut request = TradeRequest::new(source_mint, destination_mint, input_amount);
        request.slippage_bps = slippage_bps;
        Ok(request)
    }

    /// Produce a swap estimate. The live service answers when configured;
    /// on failure the local calculator supplies the fallback estimate.
    pub async fn swap_quote(&self, request: &TradeRequest) -> Result<QuoteResult> {
        if let Some(live) = &self.live_quotes {
            match live.live_quote(request).await {
                Ok(quote) => {
                    info!(service = live.name(), "live quote received");
                    return Ok(QuoteResult::Live(quote));
                }
                Err(error) => {
                    warn!(
                        service = live.name(),
                        %error,
                        "live quote failed, falling back to local estimate"
                    );
                }
            }
        }

        let pricing = self.pricing.pricing_table().await?;
        let quote = self.calculator.calculate(&pricing, request)?;
        Ok(QuoteResult::Local(quote))
    }

    /// Hand a finalized quote to the swap executor; the caller signs the
    /// returned payload with their passkey.
    pub async fn prepare_swap(
        &self,
        quote: &QuoteResult,
        wallet: &Pubkey,
    ) -> Result<UnsignedSwapTransaction> {
        self.executor.prepare_swap(quote, wallet).await
    }
}

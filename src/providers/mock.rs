use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;
use solana_program::pubkey::Pubkey;

use crate::models::{
    Holding, PriceSource, PricingEntry, PricingTable, QuoteResult, UnsignedSwapTransaction,
};
use crate::providers::interface::{HoldingsProvider, PricingProvider, SwapExecutor};

pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const ETH_MINT: &str = "7vfCXTUXx5WJV5JADk17DUJ4ksgau7utNKj4b963voxs";
pub const BONK_MINT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
pub const MSOL_MINT: &str = "mSoLzYCxHdYgdzU16g5QSh3i5K3z3KZK7ytfqcJm7So";

/// The demo wallet the dashboard connects when no real indexer is wired up.
pub const DEMO_WALLET: &str = "5YNmS1R9nNSCDzb5a7mMJ1dwK9uHeAAF4CmPEwKgVWr8";

/// Static demo pricing for the five dashboard tokens.
pub fn demo_pricing_table() -> PricingTable {
    vec![
        PricingEntry::new(SOL_MINT, "SOL", Decimal::new(1005, 1), PriceSource::Static),
        PricingEntry::new(USDC_MINT, "USDC", Decimal::ONE, PriceSource::Static),
        PricingEntry::new(ETH_MINT, "ETH", Decimal::new(35025, 1), PriceSource::Static),
        PricingEntry::new(BONK_MINT, "BONK", Decimal::new(1234, 8), PriceSource::Static),
        PricingEntry::new(MSOL_MINT, "mSOL", Decimal::new(1012, 1), PriceSource::Static),
    ]
    .into_iter()
    .collect()
}

/// The demo wallet's holdings.
pub fn demo_holdings() -> Vec<Holding> {
    vec![
        Holding {
            mint: SOL_MINT.to_string(),
            symbol: "SOL".to_string(),
            name: "Solana".to_string(),
            icon: Some(format!(
                "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/{}/logo.png",
                SOL_MINT
            )),
            balance: "1.5".to_string(),
            usd_value: Decimal::new(15075, 2),
            price: Decimal::new(1005, 1),
            change_24h: Decimal::new(23, 1),
        },
        Holding {
            mint: USDC_MINT.to_string(),
            symbol: "USDC".to_string(),
            name: "USD Coin".to_string(),
            icon: Some(format!(
                "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/{}/logo.png",
                USDC_MINT
            )),
            balance: "200.45".to_string(),
            usd_value: Decimal::new(20045, 2),
            price: Decimal::ONE,
            change_24h: Decimal::new(1, 2),
        },
    ]
}

/// Serves the demo holdings for any wallet.
pub struct MockHoldingsProvider;

#[async_trait]
impl HoldingsProvider for MockHoldingsProvider {
    fn name(&self) -> &str {
        "mock-holdings"
    }

    async fn holdings(&self, _wallet: &Pubkey) -> Result<Vec<Holding>> {
        Ok(demo_holdings())
    }
}

/// Serves a fixed pricing table.
pub struct StaticPricingProvider {
    table: PricingTable,
}

impl StaticPricingProvider {
    pub fn new(table: PricingTable) -> Self {
        Self { table }
    }

    pub fn demo() -> Self {
        Self::new(demo_pricing_table())
    }
}

#[async_trait]
impl PricingProvider for StaticPricingProvider {
    fn name(&self) -> &str {
        "static-pricing"
    }

    async fn pricing_table(&self) -> Result<PricingTable> {
        Ok(self.table.clone())
    }
}

/// Stand-in swap executor: the unsigned payload is the quote itself,
/// serialized, so the full flow can run without the live service.
pub struct MockSwapExecutor;

#[async_trait]
impl SwapExecutor for MockSwapExecutor {
    async fn prepare_swap(
        &self,
        quote: &QuoteResult,
        wallet: &Pubkey,
    ) -> Result<UnsignedSwapTransaction> {
        let payload = json!({
            "quote": quote,
            "userPublicKey": wallet.to_string(),
        });
        Ok(UnsignedSwapTransaction::new(serde_json::to_vec(&payload)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn demo_pricing_covers_the_dashboard_tokens() {
        let table = demo_pricing_table();
        assert_eq!(table.len(), 5);
        for mint in [SOL_MINT, USDC_MINT, ETH_MINT, BONK_MINT, MSOL_MINT] {
            assert!(table.contains(mint), "missing pricing for {mint}");
        }
        assert_eq!(table.get(SOL_MINT).unwrap().price, Decimal::new(1005, 1));
    }

    #[test]
    fn demo_holdings_are_internally_consistent() {
        for holding in demo_holdings() {
            let balance: Decimal = holding.balance.parse().unwrap();
            assert_eq!(balance * holding.price, holding.usd_value, "{}", holding.symbol);
        }
    }

    #[tokio::test]
    async fn mock_executor_payload_carries_the_wallet() {
        let wallet = Pubkey::from_str(DEMO_WALLET).unwrap();
        let quote = QuoteResult::Local(crate::models::Quote {
            source_mint: SOL_MINT.to_string(),
            destination_mint: USDC_MINT.to_string(),
            input_amount: Decimal::TWO,
            rate: Decimal::new(1005, 1),
            gross_output_amount: Decimal::new(2010, 1),
            fee_rate: Decimal::new(5, 3),
            fee_amount: Decimal::new(1005, 3),
            net_output_amount: Decimal::new(199_995, 3),
            slippage_bps: 50,
        });

        let tx = MockSwapExecutor.prepare_swap(&quote, &wallet).await.unwrap();
        let decoded: serde_json::Value = serde_json::from_slice(&tx.transaction).unwrap();
        assert_eq!(decoded["userPublicKey"], DEMO_WALLET);
        assert!(decoded["quote"]["Local"]["net_output_amount"].is_string()
            || decoded["quote"]["Local"]["net_output_amount"].is_number());
    }
}

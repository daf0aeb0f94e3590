use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PriceSource {
    Jupiter,
    Coingecko,
    Static,
    Custom(String),
}

/// One token's quote-relevant pricing data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingEntry {
    pub mint: String,
    pub symbol: String,
    pub price: Decimal,
    pub source: PriceSource,
    pub as_of: DateTime<Utc>,
}

/// One token balance in a wallet, as supplied by a holdings provider.
///
/// `balance` is kept as the provider's decimal string; it is parsed on use so
/// a malformed value surfaces as an error instead of a silent zero. The
/// supplied `usd_value` is display data only; the valuation engine always
/// recomputes `balance * price`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    pub mint: String,
    pub symbol: String,
    pub name: String,
    pub icon: Option<String>,
    pub balance: String,
    pub usd_value: Decimal,
    pub price: Decimal,
    pub change_24h: Decimal,
}

/// Pricing lookup keyed by mint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PricingTable {
    entries: HashMap<String, PricingEntry>,
}

impl PricingEntry {
    pub fn new(
        mint: impl Into<String>,
        symbol: impl Into<String>,
        price: Decimal,
        source: PriceSource,
    ) -> Self {
        Self {
            mint: mint.into(),
            symbol: symbol.into(),
            price,
            source,
            as_of: Utc::now(),
        }
    }
}

impl PricingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: PricingEntry) {
        self.entries.insert(entry.mint.clone(), entry);
    }

    pub fn get(&self, mint: &str) -> Option<&PricingEntry> {
        self.entries.get(mint)
    }

    pub fn contains(&self, mint: &str) -> bool {
        self.entries.contains_key(mint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &PricingEntry> {
        self.entries.values()
    }

    /// Resolve a user-supplied token reference: an exact mint key wins,
    /// otherwise a case-insensitive symbol match.
    pub fn resolve(&self, reference: &str) -> Option<&PricingEntry> {
        if let Some(entry) = self.entries.get(reference) {
            return Some(entry);
        }
        self.entries
            .values()
            .find(|entry| entry.symbol.eq_ignore_ascii_case(reference))
    }
}

impl FromIterator<PricingEntry> for PricingTable {
    fn from_iter<I: IntoIterator<Item = PricingEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mint: &str, symbol: &str, price: Decimal) -> PricingEntry {
        PricingEntry::new(mint, symbol, price, PriceSource::Static)
    }

    #[test]
    fn resolve_prefers_mint_over_symbol() {
        let table: PricingTable = vec![
            entry("So11111111111111111111111111111111111111112", "SOL", Decimal::new(1005, 1)),
            entry("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", "USDC", Decimal::ONE),
        ]
        .into_iter()
        .collect();

        let by_mint = table
            .resolve("So11111111111111111111111111111111111111112")
            .unwrap();
        assert_eq!(by_mint.symbol, "SOL");

        let by_symbol = table.resolve("usdc").unwrap();
        assert_eq!(by_symbol.mint, "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");

        assert!(table.resolve("WIF").is_none());
    }

    #[test]
    fn insert_replaces_existing_mint() {
        let mut table = PricingTable::new();
        table.insert(entry("mint-a", "AAA", Decimal::ONE));
        table.insert(entry("mint-a", "AAA", Decimal::TWO));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("mint-a").unwrap().price, Decimal::TWO);
    }
}

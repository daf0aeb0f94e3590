use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A requested token-for-token trade. `slippage_bps` of `None` means the
/// configured default applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeRequest {
    pub source_mint: String,
    pub destination_mint: String,
    pub input_amount: Decimal,
    pub slippage_bps: Option<u32>,
}

/// A locally computed swap estimate.
///
/// Deliberately a pure value: no id, no timestamp. Identical pricing and
/// request inputs therefore produce identical quotes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub source_mint: String,
    pub destination_mint: String,
    pub input_amount: Decimal,
    /// Units of destination token per 1 unit of source token.
    pub rate: Decimal,
    pub gross_output_amount: Decimal,
    pub fee_rate: Decimal,
    pub fee_amount: Decimal,
    pub net_output_amount: Decimal,
    /// Carried for the consumer; never applied to `net_output_amount`.
    pub slippage_bps: u32,
}

/// A quote produced by the external quote service. The typed fields cover
/// what the dashboard displays; everything else the provider sent (route
/// plan, thresholds) is preserved in `extra` so the swap endpoint receives
/// the response unmodified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveQuote {
    pub input_mint: String,
    pub in_amount: String,
    pub output_mint: String,
    pub out_amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_impact_pct: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slippage_bps: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Which path produced a swap estimate: the live quote service supersedes
/// the local calculator whenever it answered.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum QuoteResult {
    Live(LiveQuote),
    Local(Quote),
}

/// A serialized, unsigned transaction payload. Signing happens out-of-band
/// (the passkey popup in the dashboard); this type only carries the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedSwapTransaction {
    pub transaction: Vec<u8>,
}

impl TradeRequest {
    pub fn new(
        source_mint: impl Into<String>,
        destination_mint: impl Into<String>,
        input_amount: Decimal,
    ) -> Self {
        Self {
            source_mint: source_mint.into(),
            destination_mint: destination_mint.into(),
            input_amount,
            slippage_bps: None,
        }
    }

    pub fn with_slippage_bps(mut self, slippage_bps: u32) -> Self {
        self.slippage_bps = Some(slippage_bps);
        self
    }
}

impl LiveQuote {
    pub fn out_amount_decimal(&self) -> Option<Decimal> {
        self.out_amount.trim().parse().ok()
    }
}

impl QuoteResult {
    pub fn is_live(&self) -> bool {
        matches!(self, QuoteResult::Live(_))
    }
}

impl UnsignedSwapTransaction {
    pub fn new(transaction: Vec<u8>) -> Self {
        Self { transaction }
    }

    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        Ok(Self {
            transaction: BASE64.decode(encoded)?,
        })
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.transaction)
    }
}

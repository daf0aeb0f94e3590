use rust_decimal::Decimal;

/// Engine error taxonomy. All variants are input-validation failures
/// returned synchronously to the caller; nothing here is transient, so the
/// engine never retries.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid holding data: {0}")]
    InvalidHoldingData(String),

    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Identical source and destination token: {0}")]
    IdenticalTokens(String),

    #[error("Invalid trade amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Slippage out of range [0, 10000] bps: {0}")]
    InvalidSlippage(u32),

    #[error("Destination token has zero price: {0}")]
    ZeroDestinationPrice(String),
}

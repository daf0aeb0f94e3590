use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate view over a wallet's holdings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub previous_day_value: Decimal,
    pub daily_change_abs: Decimal,
    pub daily_change_pct: Decimal,
    pub warnings: Vec<ValuationWarning>,
}

/// Non-fatal conditions surfaced alongside a summary. The computation still
/// completes; callers decide whether to display them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValuationWarning {
    /// The previous-day base value was zero or negative, so the percentage
    /// change is reported as zero instead of dividing.
    DegenerateBaseValue,
    /// The provider-supplied `usd_value` disagreed with `balance * price`;
    /// the recomputed value was used.
    StaleUsdValue { mint: String },
}

impl PortfolioSummary {
    /// Summary of an empty portfolio: all zeros, flagged degenerate since
    /// there is no base value to compute a change against.
    pub fn empty() -> Self {
        Self {
            total_value: Decimal::ZERO,
            previous_day_value: Decimal::ZERO,
            daily_change_abs: Decimal::ZERO,
            daily_change_pct: Decimal::ZERO,
            warnings: vec![ValuationWarning::DegenerateBaseValue],
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ValuationWarning::DegenerateBaseValue))
    }
}

impl std::fmt::Display for ValuationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValuationWarning::DegenerateBaseValue => {
                write!(f, "previous-day base value is degenerate; change reported as 0")
            }
            ValuationWarning::StaleUsdValue { mint } => {
                write!(f, "supplied usd_value for {} was stale and has been recomputed", mint)
            }
        }
    }
}

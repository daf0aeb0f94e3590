use rust_decimal::Decimal;

use crate::engine::error::EngineError;
use crate::models::{Holding, PortfolioSummary, ValuationWarning};
use crate::utils::math;

/// Tolerance for comparing a provider-supplied `usd_value` against the
/// recomputed `balance * price`.
fn usd_value_tolerance() -> Decimal {
    Decimal::new(1, 6)
}

/// Compute aggregate portfolio statistics from a list of holdings.
///
/// Each holding's contribution is recomputed as `balance * price`; the
/// supplied `usd_value` is never trusted. The previous-day base is derived
/// from `change_24h`, guarding the divisor so a -100% (or worse) mover can
/// never divide by zero: such holdings contribute nothing to the base and
/// the summary is flagged `DegenerateBaseValue` instead.
///
/// Order-independent and pure: same holdings, same summary.
pub fn summarize(holdings: &[Holding]) -> Result<PortfolioSummary, EngineError> {
    if holdings.is_empty() {
        return Ok(PortfolioSummary::empty());
    }

    let mut total_value = Decimal::ZERO;
    let mut previous_day_value = Decimal::ZERO;
    let mut degenerate = false;
    let mut warnings = Vec::new();

    for holding in holdings {
        let balance = math::parse_decimal(&holding.balance).ok_or_else(|| {
            EngineError::InvalidHoldingData(format!(
                "unparseable balance {:?} for {}",
                holding.balance, holding.mint
            ))
        })?;

        if balance < Decimal::ZERO {
            return Err(EngineError::InvalidHoldingData(format!(
                "negative balance for {}",
                holding.mint
            )));
        }
        if holding.price < Decimal::ZERO {
            return Err(EngineError::InvalidHoldingData(format!(
                "negative price for {}",
                holding.mint
            )));
        }

        let usd_value = balance * holding.price;
        if (usd_value - holding.usd_value).abs() > usd_value_tolerance() {
            warnings.push(ValuationWarning::StaleUsdValue {
                mint: holding.mint.clone(),
            });
        }
        total_value += usd_value;

        // usd / (1 + change/100) is the holding's value 24h ago.
        let base_divisor = Decimal::ONE + holding.change_24h / Decimal::ONE_HUNDRED;
        if base_divisor <= Decimal::ZERO {
            degenerate = true;
        } else {
            previous_day_value += usd_value / base_divisor;
        }
    }

    let daily_change_abs = total_value - previous_day_value;
    let daily_change_pct = if previous_day_value <= Decimal::ZERO {
        degenerate = true;
        Decimal::ZERO
    } else {
        math::percentage_change(previous_day_value, total_value) * Decimal::ONE_HUNDRED
    };

    if degenerate {
        warnings.push(ValuationWarning::DegenerateBaseValue);
    }

    Ok(PortfolioSummary {
        total_value,
        previous_day_value,
        daily_change_abs,
        daily_change_pct,
        warnings,
    })
}

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::models::{PricingTable, Quote, TradeRequest};

pub const MAX_SLIPPAGE_BPS: u32 = 10_000;
pub const DEFAULT_SLIPPAGE_BPS: u32 = 50;

/// Default swap fee: 0.5%.
pub fn default_fee_rate() -> Decimal {
    Decimal::new(5, 3)
}

/// Computes simulated swap quotes from a pricing table.
///
/// Stateless beyond its configuration; `calculate` is a pure function of
/// `(pricing, request)` and performs no I/O. Live pricing discovery belongs
/// to the collaborator that supplies the table.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteCalculator {
    fee_rate: Decimal,
    default_slippage_bps: u32,
}

impl QuoteCalculator {
    pub fn new(fee_rate: Decimal, default_slippage_bps: u32) -> Self {
        Self {
            fee_rate,
            default_slippage_bps,
        }
    }

    /// Build a calculator from validated configuration, falling back to the
    /// defaults for values that do not convert.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            Decimal::from_f64(config.fee_rate).unwrap_or_else(default_fee_rate),
            config.default_slippage_bps,
        )
    }

    pub fn fee_rate(&self) -> Decimal {
        self.fee_rate
    }

    /// Compute a quote for `request` against `pricing`.
    ///
    /// Validation, in order: slippage within [0, 10000] bps, distinct mints,
    /// positive amount, both mints priced, non-zero destination price. Any
    /// failure aborts with no partial result. Slippage is echoed into the
    /// quote but never changes the computed output.
    pub fn calculate(
        &self,
        pricing: &PricingTable,
        request: &TradeRequest,
    ) -> Result<Quote, EngineError> {
        let slippage_bps = request.slippage_bps.unwrap_or(self.default_slippage_bps);
        if slippage_bps > MAX_SLIPPAGE_BPS {
            return Err(EngineError::InvalidSlippage(slippage_bps));
        }

        if request.source_mint == request.destination_mint {
            return Err(EngineError::IdenticalTokens(request.source_mint.clone()));
        }

        if request.input_amount <= Decimal::ZERO {
            return Err(EngineError::InvalidAmount(request.input_amount));
        }

        let source = pricing
            .get(&request.source_mint)
            .ok_or_else(|| EngineError::UnknownToken(request.source_mint.clone()))?;
        let destination = pricing
            .get(&request.destination_mint)
            .ok_or_else(|| EngineError::UnknownToken(request.destination_mint.clone()))?;

        if destination.price == Decimal::ZERO {
            return Err(EngineError::ZeroDestinationPrice(destination.mint.clone()));
        }

        let rate = source.price / destination.price;
        let gross_output_amount = request.input_amount * rate;
        let fee_amount = gross_output_amount * self.fee_rate;
        let net_output_amount = gross_output_amount - fee_amount;

        Ok(Quote {
            source_mint: request.source_mint.clone(),
            destination_mint: request.destination_mint.clone(),
            input_amount: request.input_amount,
            rate,
            gross_output_amount,
            fee_rate: self.fee_rate,
            fee_amount,
            net_output_amount,
            slippage_bps,
        })
    }
}

impl Default for QuoteCalculator {
    fn default() -> Self {
        Self::new(default_fee_rate(), DEFAULT_SLIPPAGE_BPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceSource, PricingEntry};

    const SOL: &str = "So11111111111111111111111111111111111111112";
    const USDC: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    fn demo_pricing() -> PricingTable {
        vec![
            PricingEntry::new(SOL, "SOL", Decimal::new(1005, 1), PriceSource::Static),
            PricingEntry::new(USDC, "USDC", Decimal::ONE, PriceSource::Static),
            PricingEntry::new("dead-mint", "DEAD", Decimal::ZERO, PriceSource::Static),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn sol_to_usdc_quote_matches_hand_computation() {
        let calculator = QuoteCalculator::default();
        let quote = calculator
            .calculate(&demo_pricing(), &TradeRequest::new(SOL, USDC, Decimal::TWO))
            .unwrap();

        assert_eq!(quote.rate, Decimal::new(1005, 1));
        assert_eq!(quote.gross_output_amount, Decimal::new(2010, 1));
        assert_eq!(quote.fee_amount, Decimal::new(1005, 3));
        assert_eq!(quote.net_output_amount, Decimal::new(199_995, 3));
        assert_eq!(quote.slippage_bps, DEFAULT_SLIPPAGE_BPS);
    }

    #[test]
    fn identical_inputs_give_identical_quotes() {
        let calculator = QuoteCalculator::default();
        let pricing = demo_pricing();
        let request = TradeRequest::new(SOL, USDC, Decimal::TWO).with_slippage_bps(100);

        let first = calculator.calculate(&pricing, &request).unwrap();
        let second = calculator.calculate(&pricing, &request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn identical_tokens_fail_regardless_of_amount() {
        let calculator = QuoteCalculator::default();
        for amount in [Decimal::ZERO, Decimal::TWO, Decimal::from(-3)] {
            let err = calculator
                .calculate(&demo_pricing(), &TradeRequest::new(SOL, SOL, amount))
                .unwrap_err();
            assert!(matches!(err, EngineError::IdenticalTokens(_)));
        }
    }

    #[test]
    fn unknown_mints_are_rejected() {
        let calculator = QuoteCalculator::default();
        let pricing = demo_pricing();

        let err = calculator
            .calculate(&pricing, &TradeRequest::new("unknown", USDC, Decimal::ONE))
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownToken(mint) if mint == "unknown"));

        let err = calculator
            .calculate(&pricing, &TradeRequest::new(SOL, "unknown", Decimal::ONE))
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownToken(mint) if mint == "unknown"));
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let calculator = QuoteCalculator::default();
        for amount in [Decimal::ZERO, Decimal::NEGATIVE_ONE] {
            let err = calculator
                .calculate(&demo_pricing(), &TradeRequest::new(SOL, USDC, amount))
                .unwrap_err();
            assert!(matches!(err, EngineError::InvalidAmount(_)));
        }
    }

    #[test]
    fn slippage_bounds_are_enforced() {
        let calculator = QuoteCalculator::default();
        let pricing = demo_pricing();

        let err = calculator
            .calculate(
                &pricing,
                &TradeRequest::new(SOL, USDC, Decimal::ONE).with_slippage_bps(15_000),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSlippage(15_000)));

        // Both boundaries are legal.
        for bps in [0, MAX_SLIPPAGE_BPS] {
            let quote = calculator
                .calculate(
                    &pricing,
                    &TradeRequest::new(SOL, USDC, Decimal::ONE).with_slippage_bps(bps),
                )
                .unwrap();
            assert_eq!(quote.slippage_bps, bps);
        }
    }

    #[test]
    fn slippage_is_echoed_but_never_applied() {
        let calculator = QuoteCalculator::default();
        let pricing = demo_pricing();

        let tight = calculator
            .calculate(
                &pricing,
                &TradeRequest::new(SOL, USDC, Decimal::TWO).with_slippage_bps(1),
            )
            .unwrap();
        let loose = calculator
            .calculate(
                &pricing,
                &TradeRequest::new(SOL, USDC, Decimal::TWO).with_slippage_bps(9_999),
            )
            .unwrap();

        assert_eq!(tight.net_output_amount, loose.net_output_amount);
        assert_ne!(tight.slippage_bps, loose.slippage_bps);
    }

    #[test]
    fn zero_destination_price_is_rejected() {
        let calculator = QuoteCalculator::default();
        let err = calculator
            .calculate(&demo_pricing(), &TradeRequest::new(SOL, "dead-mint", Decimal::ONE))
            .unwrap_err();
        assert!(matches!(err, EngineError::ZeroDestinationPrice(_)));
    }

    #[test]
    fn zero_source_price_quotes_to_zero_output() {
        let calculator = QuoteCalculator::default();
        let quote = calculator
            .calculate(&demo_pricing(), &TradeRequest::new("dead-mint", USDC, Decimal::ONE))
            .unwrap();
        assert_eq!(quote.rate, Decimal::ZERO);
        assert_eq!(quote.net_output_amount, Decimal::ZERO);
    }

    #[test]
    fn zero_fee_rate_keeps_gross_and_net_equal() {
        let calculator = QuoteCalculator::new(Decimal::ZERO, DEFAULT_SLIPPAGE_BPS);
        let quote = calculator
            .calculate(&demo_pricing(), &TradeRequest::new(SOL, USDC, Decimal::TWO))
            .unwrap();
        assert_eq!(quote.fee_amount, Decimal::ZERO);
        assert_eq!(quote.net_output_amount, quote.gross_output_amount);
    }
}

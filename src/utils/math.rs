use rust_decimal::Decimal;

/// Parse a decimal string, tolerating surrounding whitespace. Returns `None`
/// for anything that is not a plain decimal number.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    value.trim().parse().ok()
}

/// Convert basis points to a fraction: 50 bps -> 0.005.
pub fn bps_to_fraction(bps: u32) -> Decimal {
    Decimal::from(bps) / Decimal::from(10_000)
}

/// Percentage change from `old_value` to `new_value`, as a fraction.
/// A zero base yields zero rather than dividing.
pub fn percentage_change(old_value: Decimal, new_value: Decimal) -> Decimal {
    if old_value == Decimal::ZERO {
        return Decimal::ZERO;
    }

    (new_value - old_value) / old_value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal_accepts_plain_numbers_only() {
        assert_eq!(parse_decimal("1.5"), Some(Decimal::new(15, 1)));
        assert_eq!(parse_decimal("  200.45 "), Some(Decimal::new(20045, 2)));
        assert_eq!(parse_decimal("-3"), Some(Decimal::from(-3)));
        assert_eq!(parse_decimal("1.5 SOL"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn bps_conversions() {
        assert_eq!(bps_to_fraction(50), Decimal::new(5, 3));
        assert_eq!(bps_to_fraction(0), Decimal::ZERO);
        assert_eq!(bps_to_fraction(10_000), Decimal::ONE);
    }

    #[test]
    fn percentage_change_guards_zero_base() {
        assert_eq!(
            percentage_change(Decimal::from(100), Decimal::from(110)),
            Decimal::new(1, 1)
        );
        assert_eq!(percentage_change(Decimal::ZERO, Decimal::from(110)), Decimal::ZERO);
    }
}

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Display helpers matching the dashboard's table rendering. All pure; the
/// engine never depends on them.

/// USD values render with two decimal places.
pub fn format_usd(value: Decimal) -> String {
    format!("${:.2}", value)
}

/// Unit prices below one cent render in scientific notation so meme-token
/// prices stay legible; everything else gets two decimal places.
pub fn format_price(price: Decimal) -> String {
    if price > Decimal::ZERO && price < Decimal::new(1, 2) {
        format!("${:.2e}", price.to_f64().unwrap_or(0.0))
    } else {
        format!("${:.2}", price)
    }
}

/// Estimated output amounts render with six decimal places.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.6}", value)
}

/// Signed 24h change, always carrying an explicit sign.
pub fn format_change(change: Decimal) -> String {
    if change >= Decimal::ZERO {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

/// Balances render with at most `max_decimal_places` fraction digits (no
/// zero-padding) and thousands separators on the integer part.
pub fn format_balance(value: Decimal, max_decimal_places: u32) -> String {
    let rounded = value.round_dp(max_decimal_places).normalize();
    let text = rounded.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Whale-denominated tokens show whole balances; everything else gets four
/// fraction digits.
pub fn balance_display_places(symbol: &str) -> u32 {
    if symbol == "BONK" {
        0
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_and_amount_formatting() {
        assert_eq!(format_usd(Decimal::new(35120, 2)), "$351.20");
        assert_eq!(format_usd(Decimal::new(2004500, 4)), "$200.45");
        assert_eq!(format_amount(Decimal::new(199_995, 3)), "199.995000");
    }

    #[test]
    fn sub_cent_prices_use_scientific_notation() {
        assert_eq!(format_price(Decimal::new(1234, 8)), "$1.23e-5");
        assert_eq!(format_price(Decimal::new(1005, 1)), "$100.50");
        assert_eq!(format_price(Decimal::ONE), "$1.00");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn change_carries_explicit_sign() {
        assert_eq!(format_change(Decimal::new(23, 1)), "+2.30%");
        assert_eq!(format_change(Decimal::new(-12, 1)), "-1.20%");
        assert_eq!(format_change(Decimal::ZERO), "+0.00%");
    }

    #[test]
    fn balances_are_grouped_and_trimmed() {
        assert_eq!(format_balance(Decimal::new(15, 1), 4), "1.5");
        assert_eq!(format_balance(Decimal::from(1_234_567), 0), "1,234,567");
        assert_eq!(format_balance(Decimal::new(12_345_678_912, 4), 4), "1,234,567.8912");
        assert_eq!(format_balance(Decimal::new(9_876_543, 1), 0), "987,654");
        assert_eq!(format_balance(Decimal::from(-1000), 0), "-1,000");
    }

    #[test]
    fn bonk_balances_render_whole() {
        assert_eq!(balance_display_places("BONK"), 0);
        assert_eq!(balance_display_places("SOL"), 4);
    }
}

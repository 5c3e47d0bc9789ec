//! # Money Module
//!
//! Rendering helpers for monetary values. All amounts are `rust_decimal::Decimal`
//! in a single implicit currency.

use crate::config::CURRENCY_SYMBOL;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with exactly 2 fractional digits, e.g. `$1000.00`.
///
/// The symbol comes before the sign: `$-250.00`.
pub fn format_amount(amount: Decimal) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, to_cents(amount))
}

/// Format a fractional rate as a percentage, e.g. `0.02` -> `2.00%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{:.2}%", to_cents(rate * Decimal::ONE_HUNDRED))
}

/// Round half away from zero, the way printf-style `%.2f` does.
fn to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_pads_to_two_places() {
        assert_eq!(format_amount(dec!(1000)), "$1000.00");
        assert_eq!(format_amount(dec!(12.5)), "$12.50");
        assert_eq!(format_amount(dec!(0)), "$0.00");
    }

    #[test]
    fn test_format_amount_rounds() {
        assert_eq!(format_amount(dec!(10.456)), "$10.46");
        assert_eq!(format_amount(dec!(10.125)), "$10.13");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(dec!(-250)), "$-250.00");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(dec!(0.02)), "2.00%");
        assert_eq!(format_rate(dec!(0.035)), "3.50%");
        assert_eq!(format_rate(dec!(0)), "0.00%");
    }
}

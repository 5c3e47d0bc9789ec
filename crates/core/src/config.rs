//! # Config Module
//!
//! Policy thresholds shared by the account rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Floor a savings account balance may not drop below after a withdrawal.
pub const MINIMUM_BALANCE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Amount moved by [`crate::transfer_fixed`].
pub const TRANSFER_AMOUNT: Decimal = Decimal::from_parts(300, 0, 0, false, 0);

/// Prefix used when rendering monetary amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// Bank-wide policy values.
///
/// `Default` yields [`MINIMUM_BALANCE`] and [`TRANSFER_AMOUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankPolicy {
    /// Savings minimum balance
    pub minimum_balance: Decimal,
    /// Fixed savings -> current transfer amount
    pub transfer_amount: Decimal,
}

impl BankPolicy {
    pub fn new(minimum_balance: Decimal, transfer_amount: Decimal) -> Self {
        Self {
            minimum_balance,
            transfer_amount,
        }
    }
}

impl Default for BankPolicy {
    fn default() -> Self {
        Self::new(MINIMUM_BALANCE, TRANSFER_AMOUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_constants() {
        assert_eq!(MINIMUM_BALANCE, dec!(100));
        assert_eq!(TRANSFER_AMOUNT, dec!(300));
        assert_eq!(CURRENCY_SYMBOL, "$");
    }

    #[test]
    fn test_default_policy() {
        let policy = BankPolicy::default();
        assert_eq!(policy.minimum_balance, dec!(100));
        assert_eq!(policy.transfer_amount, dec!(300));
    }

    #[test]
    fn test_policy_json_uses_strings() {
        let policy = BankPolicy::new(dec!(250), dec!(75.5));
        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(json, r#"{"minimum_balance":"250","transfer_amount":"75.5"}"#);

        let parsed: BankPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, policy);
    }
}

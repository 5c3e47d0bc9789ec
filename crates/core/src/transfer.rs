//! # Transfer Module
//!
//! Moves funds from a savings account into a current account. Both accounts
//! are updated in place; a refused transfer touches neither.

use crate::account::Account;
use crate::config::TRANSFER_AMOUNT;
use crate::current::CurrentAccount;
use crate::error::{AccountError, AccountResult};
use crate::savings::SavingsAccount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub from_account: String,
    pub to_account: String,
    pub amount: Decimal,
    /// Savings balance after the debit
    pub from_balance: Decimal,
    /// Current balance after the credit
    pub to_balance: Decimal,
}

impl fmt::Display for TransferReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer {} from {} to {}",
            self.amount, self.from_account, self.to_account
        )
    }
}

/// Transfer `amount` from `from` (savings) into `to` (current).
///
/// # Errors
/// - `InvalidAmount` if `amount` is zero or negative
/// - `TransferShortfall` if the savings balance is below `amount`
/// - `MinimumBalanceBreach` if the debit would break the savings minimum
///
/// The savings debit runs first, so the current account is only credited
/// once the funds have actually left savings.
pub fn transfer(
    from: &mut SavingsAccount,
    to: &mut CurrentAccount,
    amount: Decimal,
) -> AccountResult<TransferReceipt> {
    // A non-positive amount would debit `to` outside its overdraft rule.
    if amount <= Decimal::ZERO {
        tracing::warn!(
            from = from.number(),
            to = to.number(),
            %amount,
            "Transfer refused: amount must be positive"
        );
        return Err(AccountError::InvalidAmount(amount));
    }

    let available = from.balance();
    if available < amount {
        tracing::warn!(
            from = from.number(),
            to = to.number(),
            %amount,
            %available,
            "Transfer refused: savings shortfall"
        );
        return Err(AccountError::TransferShortfall {
            available,
            required: amount,
        });
    }

    from.withdraw(amount)?;
    to.deposit(amount);

    tracing::debug!(from = from.number(), to = to.number(), %amount, "Transfer completed");

    Ok(TransferReceipt {
        from_account: from.number().to_string(),
        to_account: to.number().to_string(),
        amount,
        from_balance: from.balance(),
        to_balance: to.balance(),
    })
}

/// [`transfer`] of the bank-wide [`TRANSFER_AMOUNT`].
pub fn transfer_fixed(
    from: &mut SavingsAccount,
    to: &mut CurrentAccount,
) -> AccountResult<TransferReceipt> {
    transfer(from, to, TRANSFER_AMOUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn accounts(savings: Decimal, current: Decimal) -> (SavingsAccount, CurrentAccount) {
        (
            SavingsAccount::new("S123", "John Doe", savings, dec!(0.02)),
            CurrentAccount::new("C456", "Jane Doe", current, dec!(500)),
        )
    }

    #[test]
    fn test_transfer_moves_funds() {
        let (mut savings, mut current) = accounts(dec!(1500), dec!(1000));

        let receipt = transfer_fixed(&mut savings, &mut current).unwrap();

        assert_eq!(savings.balance(), dec!(1200));
        assert_eq!(current.balance(), dec!(1300));
        assert_eq!(receipt.amount, dec!(300));
        assert_eq!(receipt.from_balance, dec!(1200));
        assert_eq!(receipt.to_balance, dec!(1300));
        assert_eq!(receipt.to_string(), "Transfer 300 from S123 to C456");
    }

    #[test]
    fn test_transfer_shortfall() {
        let (mut savings, mut current) = accounts(dec!(299.99), dec!(1000));

        let err = transfer_fixed(&mut savings, &mut current).unwrap_err();

        assert_eq!(
            err,
            AccountError::TransferShortfall {
                available: dec!(299.99),
                required: dec!(300),
            }
        );
        assert_eq!(savings.balance(), dec!(299.99));
        assert_eq!(current.balance(), dec!(1000));
    }

    #[test]
    fn test_transfer_blocked_by_minimum_balance() {
        // Passes the shortfall check but would leave savings at 50.
        let (mut savings, mut current) = accounts(dec!(350), dec!(1000));

        let err = transfer_fixed(&mut savings, &mut current).unwrap_err();

        assert!(matches!(err, AccountError::MinimumBalanceBreach { .. }));
        assert_eq!(savings.balance(), dec!(350));
        assert_eq!(current.balance(), dec!(1000));
    }

    #[test]
    fn test_transfer_exactly_to_minimum() {
        let (mut savings, mut current) = accounts(dec!(400), dec!(-500));

        transfer_fixed(&mut savings, &mut current).unwrap();

        assert_eq!(savings.balance(), dec!(100));
        assert_eq!(current.balance(), dec!(-200));
    }

    #[test]
    fn test_transfer_rejects_non_positive_amount() {
        for amount in [dec!(-10000), dec!(-0.01), dec!(0)] {
            let (mut savings, mut current) = accounts(dec!(1000), dec!(0));

            let err = transfer(&mut savings, &mut current, amount).unwrap_err();

            assert_eq!(err, AccountError::InvalidAmount(amount));
            assert_eq!(savings.balance(), dec!(1000));
            assert_eq!(current.balance(), dec!(0));
            assert!(current.balance() >= current.floor());
        }
    }

    #[test]
    fn test_transfer_arbitrary_amount() {
        let (mut savings, mut current) = accounts(dec!(1000), dec!(0));

        transfer(&mut savings, &mut current, dec!(12.34)).unwrap();

        assert_eq!(savings.balance(), dec!(987.66));
        assert_eq!(current.balance(), dec!(12.34));
    }
}

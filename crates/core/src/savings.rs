//! # Savings Module
//!
//! Savings accounts earn interest and must keep a minimum balance after every
//! withdrawal.

use crate::account::{render_details, Account, AccountKind, Holding};
use crate::config::MINIMUM_BALANCE;
use crate::error::{AccountError, AccountResult};
use crate::money::format_rate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Savings account.
///
/// Invariant: a withdrawal never leaves the balance below `minimum_balance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsAccount {
    #[serde(flatten)]
    holding: Holding,
    /// Fraction, 0.02 = 2%
    interest_rate: Decimal,
    minimum_balance: Decimal,
}

impl SavingsAccount {
    /// Open a savings account with the bank-wide [`MINIMUM_BALANCE`].
    pub fn new(
        number: impl Into<String>,
        holder: impl Into<String>,
        balance: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        Self::with_minimum_balance(number, holder, balance, interest_rate, MINIMUM_BALANCE)
    }

    pub fn with_minimum_balance(
        number: impl Into<String>,
        holder: impl Into<String>,
        balance: Decimal,
        interest_rate: Decimal,
        minimum_balance: Decimal,
    ) -> Self {
        Self {
            holding: Holding::new(number, holder, balance),
            interest_rate,
            minimum_balance,
        }
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn minimum_balance(&self) -> Decimal {
        self.minimum_balance
    }
}

impl Account for SavingsAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn number(&self) -> &str {
        self.holding.number()
    }

    fn holder(&self) -> &str {
        self.holding.holder()
    }

    fn balance(&self) -> Decimal {
        self.holding.balance()
    }

    fn deposit(&mut self, amount: Decimal) {
        self.holding.credit(amount);
        tracing::debug!(account = self.holding.number(), %amount, "Savings deposit");
    }

    // The minimum balance check is the only gate: an overdrawing amount also
    // lands below the minimum.
    fn withdraw(&mut self, amount: Decimal) -> AccountResult<()> {
        let minimum = self.minimum_balance;
        match self.holding.debit_above(amount, minimum) {
            Ok(()) => {
                tracing::debug!(account = self.holding.number(), %amount, "Savings withdrawal");
                Ok(())
            }
            Err(balance) => {
                tracing::warn!(
                    account = self.holding.number(),
                    %amount,
                    %balance,
                    %minimum,
                    "Withdrawal refused: minimum balance not met"
                );
                Err(AccountError::MinimumBalanceBreach {
                    balance,
                    requested: amount,
                    minimum,
                })
            }
        }
    }

    fn describe(&self) -> String {
        let detail = format!("Interest Rate: {}", format_rate(self.interest_rate));
        render_details(self.kind(), &self.holding, Some(&detail))
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

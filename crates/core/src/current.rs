//! # Current Module
//!
//! Current accounts may be overdrawn down to a fixed limit.

use crate::account::{render_details, Account, AccountKind, Holding};
use crate::error::{AccountError, AccountResult};
use crate::money::format_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current account.
///
/// Invariant: a withdrawal never leaves the balance below `-overdraft_limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAccount {
    #[serde(flatten)]
    holding: Holding,
    overdraft_limit: Decimal,
}

impl CurrentAccount {
    /// A negative `overdraft_limit` is treated as its absolute value.
    pub fn new(
        number: impl Into<String>,
        holder: impl Into<String>,
        balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Self {
        Self {
            holding: Holding::new(number, holder, balance),
            overdraft_limit: overdraft_limit.abs(),
        }
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    /// Lowest balance a withdrawal may leave behind
    pub fn floor(&self) -> Decimal {
        -self.overdraft_limit
    }
}

impl Account for CurrentAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Current
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
        tracing::debug!(account = self.holding.number(), %amount, "Current deposit");
    }

    fn withdraw(&mut self, amount: Decimal) -> AccountResult<()> {
        let floor = self.floor();
        if let Err(balance) = self.holding.debit_above(amount, floor) {
            tracing::warn!(
                account = self.holding.number(),
                %amount,
                %balance,
                limit = %self.overdraft_limit,
                "Withdrawal refused: overdraft limit exceeded"
            );
            return Err(AccountError::OverdraftExceeded {
                balance,
                requested: amount,
                limit: self.overdraft_limit,
            });
        }

        tracing::debug!(account = self.holding.number(), %amount, "Current withdrawal");
        Ok(())
    }

    fn describe(&self) -> String {
        let detail = format!("Overdraft Limit: {}", format_amount(self.overdraft_limit));
        render_details(self.kind(), &self.holding, Some(&detail))
    }
}

impl fmt::Display for CurrentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

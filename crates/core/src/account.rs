//! # Account Module
//!
//! The [`Account`] trait is the capability set shared by every account kind.
//! Each kind owns a [`Holding`] (number, holder, balance) and supplies its own
//! withdrawal rule and detail line; the common report lines come from
//! [`render_details`].

use crate::error::{AccountError, AccountResult};
use crate::money::format_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

/// Account product kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Plain account, default withdrawal rule
    Basic,
    /// Interest-bearing, minimum balance
    Savings,
    /// Overdraft allowed
    Current,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Basic => "basic",
            AccountKind::Savings => "savings",
            AccountKind::Current => "current",
        }
    }

    /// Label used in the report header
    pub fn title(&self) -> &'static str {
        match self {
            AccountKind::Basic => "Account",
            AccountKind::Savings => "Savings Account",
            AccountKind::Current => "Current Account",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operations every account kind supports.
pub trait Account {
    fn kind(&self) -> AccountKind;

    /// Opaque identifier, fixed at creation
    fn number(&self) -> &str;

    /// Display name of the holder, fixed at creation
    fn holder(&self) -> &str;

    fn balance(&self) -> Decimal;

    /// Credit `amount`. Deposits are never refused.
    fn deposit(&mut self, amount: Decimal);

    /// Debit `amount` if the kind's rule allows it.
    ///
    /// On `Err` the balance is unchanged.
    fn withdraw(&mut self, amount: Decimal) -> AccountResult<()>;

    /// Multi-line report, without a trailing newline.
    fn describe(&self) -> String;

    /// Write [`Account::describe`] followed by a newline.
    fn write_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.describe())
    }

    /// Print the report to stdout.
    fn display_details(&self) -> io::Result<()> {
        self.write_details(&mut io::stdout().lock())
    }
}

/// State shared by all account kinds.
///
/// `balance` is private so it can only move through `credit`/`debit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    number: String,
    holder: String,
    balance: Decimal,
}

impl Holding {
    pub fn new(number: impl Into<String>, holder: impl Into<String>, balance: Decimal) -> Self {
        Self {
            number: number.into(),
            holder: holder.into(),
            balance,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Balance after a hypothetical debit of `amount`
    pub fn balance_after(&self, amount: Decimal) -> Decimal {
        self.balance - amount
    }

    pub(crate) fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Debit only if the resulting balance stays at or above `floor`.
    ///
    /// Returns the balance that blocked the debit on refusal.
    pub(crate) fn debit_above(&mut self, amount: Decimal, floor: Decimal) -> Result<(), Decimal> {
        if self.balance_after(amount) >= floor {
            self.balance -= amount;
            Ok(())
        } else {
            Err(self.balance)
        }
    }
}

/// Build the report for any account kind.
///
/// ```text
/// Account Details for <Kind> (ID: <number>):
///    Holder: <holder>
///    Balance: $<balance>
///    <detail>
/// ```
pub fn render_details(kind: AccountKind, holding: &Holding, detail: Option<&str>) -> String {
    let mut out = format!(
        "Account Details for {} (ID: {}):\n   Holder: {}\n   Balance: {}",
        kind.title(),
        holding.number(),
        holding.holder(),
        format_amount(holding.balance())
    );
    if let Some(detail) = detail {
        out.push_str("\n   ");
        out.push_str(detail);
    }
    out
}

/// Plain account: a withdrawal may not exceed the balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAccount {
    #[serde(flatten)]
    holding: Holding,
}

impl BasicAccount {
    pub fn new(number: impl Into<String>, holder: impl Into<String>, balance: Decimal) -> Self {
        Self {
            holding: Holding::new(number, holder, balance),
        }
    }
}

impl Account for BasicAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Basic
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
    }

    fn withdraw(&mut self, amount: Decimal) -> AccountResult<()> {
        self.holding
            .debit_above(amount, Decimal::ZERO)
            .map_err(|balance| {
                tracing::warn!(
                    account = self.holding.number(),
                    %amount,
                    %balance,
                    "Withdrawal refused: insufficient funds"
                );
                AccountError::InsufficientFunds {
                    balance,
                    requested: amount,
                }
            })
    }

    fn describe(&self) -> String {
        render_details(self.kind(), &self.holding, None)
    }
}

impl fmt::Display for BasicAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

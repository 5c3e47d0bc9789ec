//! # Twinbank Core
//!
//! Domain types for a two-product bank:
//! - `SavingsAccount`: interest-bearing, may not drop below a minimum balance
//! - `CurrentAccount`: may go negative down to its overdraft limit
//! - `transfer`: moves funds from a savings account into a current account
//!
//! Every account implements the [`Account`] trait. Rejected operations return
//! an [`AccountError`] and leave balances untouched.

pub mod account;
pub mod config;
pub mod current;
pub mod error;
pub mod money;
pub mod savings;
pub mod transfer;

pub use account::{Account, AccountKind, BasicAccount, Holding};
pub use config::{BankPolicy, CURRENCY_SYMBOL, MINIMUM_BALANCE, TRANSFER_AMOUNT};
pub use current::CurrentAccount;
pub use error::{AccountError, AccountResult};
pub use savings::SavingsAccount;
pub use transfer::{transfer, transfer_fixed, TransferReceipt};

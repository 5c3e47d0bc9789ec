//! # Error Module
//!
//! Rejections raised by account rules. The `Display` text of each variant is
//! the message shown to the account holder.

use rust_decimal::Decimal;
use thiserror::Error;

/// Why a withdrawal or transfer was refused.
///
/// A rejected operation never mutates any balance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Insufficient funds for withdrawal")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("Withdrawal failed minimum balance not met")]
    MinimumBalanceBreach {
        balance: Decimal,
        requested: Decimal,
        minimum: Decimal,
    },

    #[error("Withdrawal failed overdraft limit exceeded")]
    OverdraftExceeded {
        balance: Decimal,
        requested: Decimal,
        limit: Decimal,
    },

    #[error("Transfer failed insufficient funds in savings account")]
    TransferShortfall { available: Decimal, required: Decimal },

    #[error("Transfer failed invalid amount: {0}")]
    InvalidAmount(Decimal),
}

/// Result type alias for account operations
pub type AccountResult<T> = Result<T, AccountError>;

impl AccountError {
    /// True for the three withdrawal rules (plain, savings, current)
    pub fn is_withdrawal_rejection(&self) -> bool {
        matches!(
            self,
            AccountError::InsufficientFunds { .. }
                | AccountError::MinimumBalanceBreach { .. }
                | AccountError::OverdraftExceeded { .. }
        )
    }

    pub fn is_transfer_shortfall(&self) -> bool {
        matches!(self, AccountError::TransferShortfall { .. })
    }
}

//! # Error Module
//!
//! Domain errors for Minibank using thiserror.

use crate::account::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// All variants are local, recoverable conditions reported to the
/// immediate caller; none of them terminate the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The amount is not usable for the requested operation: negative on
    /// construction, or not strictly positive for a deposit/withdrawal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// A withdrawal asked for more than the account holds.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// No account exists under the given id.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Check whether this is an insufficient-funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }

    /// Check whether this is a lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::AccountNotFound(_))
    }
}

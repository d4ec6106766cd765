//! # Account Module
//!
//! A single customer's identity and balance. The account owns its own
//! transaction rules: deposits and withdrawals validate the amount before
//! touching the balance, so `balance >= 0` holds at all times.

use crate::amount::Amount;
use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// First id handed out by the registry's allocator.
pub const ACCOUNT_ID_BASE: u32 = 2000;

/// Unique account identifier (2000, 2001, ...).
///
/// Ids are assigned by [`crate::Registry`] in strictly increasing order
/// and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountId(u32);

impl AccountId {
    /// Create an AccountId from a raw integer
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw integer value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(AccountId)
    }
}

impl From<u32> for AccountId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A customer account.
///
/// Identity (`id`, `holder_name`) is fixed at creation; the balance is
/// mutated only through [`Account::deposit`] and [`Account::withdraw`].
/// There is no account state machine and no close operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    balance: Amount,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create an account with a zero balance.
    ///
    /// Holder names are not validated; creation cannot fail.
    pub fn new(id: AccountId, holder_name: impl Into<String>) -> Self {
        Self {
            id,
            holder_name: holder_name.into(),
            balance: Amount::ZERO,
            created_at: Utc::now(),
        }
    }

    /// The account's id
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// The account holder's name
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// The current balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// When the account was opened
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Add funds to the account and return the new balance.
    ///
    /// Fails with [`CoreError::InvalidAmount`] when `amount` is not
    /// strictly positive; the balance is left untouched.
    pub fn deposit(&mut self, amount: Amount) -> CoreResult<Amount> {
        if !amount.is_positive() {
            return Err(CoreError::InvalidAmount(amount.value()));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(CoreError::InvalidAmount(amount.value()))?;
        Ok(self.balance)
    }

    /// Remove funds from the account and return the new balance.
    ///
    /// Fails with [`CoreError::InvalidAmount`] when `amount` is not
    /// strictly positive, and with [`CoreError::InsufficientFunds`] when
    /// it exceeds the balance. Either way the balance is left untouched.
    pub fn withdraw(&mut self, amount: Amount) -> CoreResult<Amount> {
        if !amount.is_positive() {
            return Err(CoreError::InvalidAmount(amount.value()));
        }
        match self.balance.checked_sub(amount) {
            Some(remaining) => {
                self.balance = remaining;
                Ok(self.balance)
            }
            None => Err(CoreError::InsufficientFunds {
                requested: amount.value(),
                available: self.balance.value(),
            }),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (holder: {}, balance: {})",
            self.id, self.holder_name, self.balance
        )
    }
}

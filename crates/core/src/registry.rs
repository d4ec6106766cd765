//! # Registry Module
//!
//! The in-memory collection of all accounts plus the id allocator.
//!
//! The allocator is an explicit field on the registry rather than a
//! process-wide static: one registry, one id sequence.

use crate::account::{Account, AccountId, ACCOUNT_ID_BASE};
use crate::amount::Amount;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Owns the id -> account mapping and assigns identifiers.
///
/// Ids start at [`ACCOUNT_ID_BASE`], increase by one per opened account,
/// and are never reused. Enumeration yields accounts in ascending id
/// order (`BTreeMap` iteration); callers must not rely on any other
/// ordering guarantee.
#[derive(Debug, Serialize, Deserialize)]
pub struct Registry {
    accounts: BTreeMap<AccountId, Account>,
    next_id: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry with the allocator at the base id.
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_id: ACCOUNT_ID_BASE,
        }
    }

    /// Open a new zero-balance account and return its id.
    ///
    /// Never fails; holder names are not validated.
    pub fn open_account(&mut self, holder_name: impl Into<String>) -> AccountId {
        let id = AccountId::new(self.next_id);
        self.next_id += 1;
        self.accounts.insert(id, Account::new(id, holder_name));
        id
    }

    /// Look up an account by id.
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Look up an account by id, mutably.
    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// Deposit into the account with the given id.
    ///
    /// Convenience over lookup + [`Account::deposit`]; a missing id is
    /// reported as [`CoreError::AccountNotFound`].
    pub fn deposit(&mut self, id: AccountId, amount: Amount) -> CoreResult<Amount> {
        self.account_mut(id)
            .ok_or(CoreError::AccountNotFound(id))?
            .deposit(amount)
    }

    /// Withdraw from the account with the given id.
    pub fn withdraw(&mut self, id: AccountId, amount: Amount) -> CoreResult<Amount> {
        self.account_mut(id)
            .ok_or(CoreError::AccountNotFound(id))?
            .withdraw(amount)
    }

    /// All accounts, in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Number of open accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no account has been opened yet
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

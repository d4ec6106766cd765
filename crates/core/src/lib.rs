//! Minibank Core - Domain types
//!
//! This crate contains the in-memory ledger domain used across Minibank:
//! - `Amount`: Non-negative decimal wrapper for balances and transactions
//! - `Account`: A single customer's identity and balance
//! - `Registry`: The collection of all accounts plus the id allocator
//!
//! The crate performs no I/O and never logs; all failures are reported
//! to the caller through [`CoreError`].

pub mod account;
pub mod amount;
pub mod error;
pub mod registry;

pub use account::{Account, AccountId, ACCOUNT_ID_BASE};
pub use amount::Amount;
pub use error::{CoreError, CoreResult};
pub use registry::Registry;

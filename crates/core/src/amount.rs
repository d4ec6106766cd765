//! # Amount Module
//!
//! Non-negative decimal wrapper for balances and transaction amounts.
//!
//! The original console program kept money in binary floating point;
//! Minibank uses `rust_decimal` so repeated deposits and withdrawals
//! never accumulate rounding error.

use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative decimal amount.
///
/// # Invariant
/// The inner value is always >= 0, enforced by the constructor.
///
/// # Examples
/// ```
/// use minibank_core::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = Amount::new(Decimal::new(100, 0)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(100, 0));
///
/// // Negative amounts are rejected
/// assert!(Amount::new(Decimal::new(-100, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Amount from a Decimal.
    ///
    /// Returns [`CoreError::InvalidAmount`] if the value is negative.
    pub fn new(value: Decimal) -> Result<Self, CoreError> {
        if value < Decimal::ZERO {
            Err(CoreError::InvalidAmount(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checked addition - None on overflow
    pub fn checked_add(&self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction - None if the result would be negative
    pub fn checked_sub(&self, other: Amount) -> Option<Amount> {
        let result = self.0.checked_sub(other.0)?;
        if result < Decimal::ZERO {
            None
        } else {
            Some(Amount(result))
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_rejects_negative() {
        let err = Amount::new(dec!(-0.01)).unwrap_err();
        assert_eq!(err, CoreError::InvalidAmount(dec!(-0.01)));
    }

    #[test]
    fn test_new_accepts_zero_and_positive() {
        assert!(Amount::new(dec!(0)).unwrap().is_zero());
        assert!(Amount::new(dec!(42.50)).unwrap().is_positive());
    }

    #[test]
    fn test_checked_add() {
        let a = Amount::new(dec!(100.25)).unwrap();
        let b = Amount::new(dec!(49.75)).unwrap();
        assert_eq!(a.checked_add(b), Some(Amount::new(dec!(150)).unwrap()));
    }

    #[test]
    fn test_checked_sub_refuses_negative_result() {
        let a = Amount::new(dec!(50)).unwrap();
        let b = Amount::new(dec!(70)).unwrap();
        assert_eq!(a.checked_sub(b), None);
        assert_eq!(b.checked_sub(a), Some(Amount::new(dec!(20)).unwrap()));
    }

    #[test]
    fn test_exact_round_trip() {
        // 0.1 + 0.2 is exact in decimal, unlike f64
        let balance = Amount::new(dec!(0.1)).unwrap();
        let step = Amount::new(dec!(0.2)).unwrap();
        let up = balance.checked_add(step).unwrap();
        assert_eq!(up.value(), dec!(0.3));
        let back = up.checked_sub(step).unwrap();
        assert_eq!(back, balance);
    }

    #[test]
    fn test_serde_as_string() {
        let amount = Amount::new(dec!(1234.56)).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"1234.56\"");

        let parsed: Amount = serde_json::from_str("\"10.00\"").unwrap();
        assert_eq!(parsed.value(), dec!(10.00));

        // Deserialization enforces the invariant too
        let negative: Result<Amount, _> = serde_json::from_str("\"-1\"");
        assert!(negative.is_err());
    }

    #[test]
    fn test_display() {
        let amount = Amount::new(dec!(60)).unwrap();
        assert_eq!(amount.to_string(), "60");
    }
}

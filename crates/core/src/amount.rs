//! # Amount Module
//!
//! Money held by a purse. Every stored balance goes through `Amount`, so a
//! balance below zero cannot be represented at all.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("{0} is below zero")]
    BelowZero(Decimal),
}

/// Balance of a purse, always `>= 0`.
///
/// ```
/// use paybox_core::Amount;
/// use rust_decimal_macros::dec;
///
/// let opening = Amount::new(dec!(1500)).unwrap();
/// let fee_inclusive = Amount::new(dec!(2020)).unwrap();
/// assert!(opening.checked_sub(&fee_inclusive).is_none());
///
/// assert!(Amount::new(dec!(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::BelowZero(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Deposit side. `None` only when the sum leaves the `Decimal` range.
    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        let sum = self.0.checked_add(other.0)?;
        Some(Self(sum))
    }

    /// Debit side. `None` when `other` is more than is held.
    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        self.0
            .checked_sub(other.0)
            .and_then(|left| Self::new(left).ok())
    }
}

impl fmt::Display for Amount {
    // Forward so `{:.2}` reaches the Decimal formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

//! # Limits Module
//!
//! Amount bounds checked before a deposit or withdrawal touches the balance.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a balance-changing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Deposit or load, increases the balance
    Deposit,
    /// Withdrawal or payment, decreases the balance
    Withdrawal,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Deposit => "deposit",
            Operation::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lower bound an amount has to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Bound {
    /// amount > value
    Above(Decimal),
    /// amount >= value
    AtLeast(Decimal),
}

impl Bound {
    /// Strictly positive amounts only.
    pub fn positive() -> Self {
        Bound::Above(Decimal::ZERO)
    }

    pub fn admits(&self, amount: Decimal) -> bool {
        match *self {
            Bound::Above(floor) => amount > floor,
            Bound::AtLeast(min) => amount >= min,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Above(floor) => write!(f, "greater than {}", floor),
            Bound::AtLeast(min) => write!(f, "at least {}", min),
        }
    }
}

/// Per-variant bounds for both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub deposit: Bound,
    pub withdrawal: Bound,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            deposit: Bound::positive(),
            withdrawal: Bound::positive(),
        }
    }
}

impl Limits {
    /// Deposits must exceed 49 and withdrawals must be at least 50.
    pub fn fifty_floor() -> Self {
        Self {
            deposit: Bound::Above(dec!(49)),
            withdrawal: Bound::AtLeast(dec!(50)),
        }
    }

    pub fn bound_for(&self, operation: Operation) -> Bound {
        match operation {
            Operation::Deposit => self.deposit,
            Operation::Withdrawal => self.withdrawal,
        }
    }

    /// Validate an amount for the given operation.
    ///
    /// # Errors
    /// `CoreError::InvalidAmount` when the amount falls outside the bound.
    pub fn check(&self, operation: Operation, amount: Decimal) -> CoreResult<()> {
        let rule = self.bound_for(operation);
        if rule.admits(amount) {
            Ok(())
        } else {
            Err(CoreError::InvalidAmount {
                operation,
                amount,
                rule,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_reject_zero_and_negative() {
        let limits = Limits::default();
        assert!(limits.check(Operation::Deposit, dec!(0)).is_err());
        assert!(limits.check(Operation::Deposit, dec!(-10)).is_err());
        assert!(limits.check(Operation::Withdrawal, dec!(0)).is_err());
        assert!(limits.check(Operation::Deposit, dec!(0.01)).is_ok());
        assert!(limits.check(Operation::Withdrawal, dec!(0.01)).is_ok());
    }

    #[test]
    fn test_fifty_floor_edges() {
        let limits = Limits::fifty_floor();

        assert!(limits.check(Operation::Deposit, dec!(49)).is_err());
        assert!(limits.check(Operation::Deposit, dec!(49.5)).is_ok());
        assert!(limits.check(Operation::Deposit, dec!(50)).is_ok());

        assert!(limits.check(Operation::Withdrawal, dec!(49.99)).is_err());
        assert!(limits.check(Operation::Withdrawal, dec!(50)).is_ok());
    }

    #[test]
    fn test_invalid_amount_message() {
        let err = Limits::fifty_floor()
            .check(Operation::Withdrawal, dec!(10))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid withdrawal amount 10: must be at least 50"
        );
    }
}

//! # Error Module
//!
//! Domain errors for Paybox using thiserror.

use crate::amount::AmountError;
use crate::limits::{Bound, Operation};
use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Everything except `UnknownVariant` belongs to the invalid-argument class:
/// the operation is aborted and the balance is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid {operation} amount {amount}: must be {rule}")]
    InvalidAmount {
        operation: Operation,
        amount: Decimal,
        rule: Bound,
    },

    #[error("Balance cannot be negative: {0}")]
    NegativeBalance(Decimal),

    #[error("Insufficient funds: need {needed}, available {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Arithmetic overflow: {0}")]
    Arithmetic(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn insufficient_funds(needed: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds { needed, available }
    }

    pub fn overflow(context: &str) -> Self {
        Self::Arithmetic(context.to_string())
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, CoreError::UnknownVariant(_))
    }
}

impl From<AmountError> for CoreError {
    fn from(err: AmountError) -> Self {
        match err {
            AmountError::BelowZero(value) => CoreError::NegativeBalance(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CoreError::insufficient_funds(dec!(2020.00), dec!(1500));
        assert_eq!(
            err.to_string(),
            "Insufficient funds: need 2020.00, available 1500"
        );

        let err = CoreError::NegativeBalance(dec!(-1));
        assert_eq!(err.to_string(), "Balance cannot be negative: -1");
    }

    #[test]
    fn test_error_checks() {
        let err = CoreError::insufficient_funds(dec!(102), dec!(50));
        assert!(err.is_insufficient_funds());
        assert!(err.is_invalid_argument());

        let err = CoreError::UnknownVariant("bitcoin".to_string());
        assert!(!err.is_invalid_argument());
        assert!(!err.is_insufficient_funds());
    }

    #[test]
    fn test_from_amount_error() {
        let err: CoreError = AmountError::BelowZero(dec!(-3)).into();
        assert_eq!(err, CoreError::NegativeBalance(dec!(-3)));
    }
}

//! # Purse Module
//!
//! The balance a variant holds, together with the only two ways to change it.
//! A `Purse` knows its `VariantKind` so validation, fees and the shortfall
//! convention are applied in one place for every variant.

use crate::amount::Amount;
use crate::error::{CoreError, CoreResult};
use crate::limits::Operation;
use crate::variant::{FailureMode, VariantKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a settled withdrawal/payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    /// Requested amount, before fee
    pub amount: Decimal,
    pub fee: Decimal,
    /// amount + fee, the value actually debited
    pub total: Decimal,
    pub balance_after: Decimal,
    pub settled_at: DateTime<Utc>,
}

impl Receipt {
    fn new(amount: Decimal, fee: Decimal, total: Decimal, balance_after: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            fee,
            total,
            balance_after,
            settled_at: Utc::now(),
        }
    }
}

/// Result of a debit that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DebitOutcome {
    Settled(Receipt),
    /// Only produced by `FailureMode::Decline` variants. Balance unchanged.
    Declined { total: Decimal, available: Decimal },
}

impl DebitOutcome {
    pub fn is_settled(&self) -> bool {
        matches!(self, DebitOutcome::Settled(_))
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            DebitOutcome::Settled(receipt) => Some(receipt),
            DebitOutcome::Declined { .. } => None,
        }
    }
}

/// Balance holder for one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purse {
    kind: VariantKind,
    balance: Amount,
}

impl Purse {
    /// Open a purse with an initial balance.
    ///
    /// # Errors
    /// `CoreError::NegativeBalance` if `initial_balance < 0`.
    pub fn open(kind: VariantKind, initial_balance: Decimal) -> CoreResult<Self> {
        let balance = Amount::new(initial_balance)?;
        Ok(Self { kind, balance })
    }

    pub fn kind(&self) -> VariantKind {
        self.kind
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Add `amount` to the balance, no fee.
    ///
    /// Returns the new balance.
    pub fn credit(&mut self, amount: Decimal) -> CoreResult<Decimal> {
        self.kind.limits().check(Operation::Deposit, amount)?;

        let amount = Amount::new(amount)?;
        self.balance = self
            .balance
            .checked_add(&amount)
            .ok_or_else(|| CoreError::overflow("deposit"))?;
        Ok(self.balance.value())
    }

    /// Debit `amount` plus the variant's fee.
    ///
    /// A shortfall is an `Err` for `Raise` variants and
    /// `Ok(DebitOutcome::Declined)` for `Decline` variants. Either way the
    /// balance is left as it was.
    pub fn debit(&mut self, amount: Decimal) -> CoreResult<DebitOutcome> {
        self.kind.limits().check(Operation::Withdrawal, amount)?;

        let policy = self.kind.fee_policy();
        let available = self.balance.value();

        // A total past Decimal::MAX exceeds any balance.
        let total = match policy.total_for(amount) {
            Ok(total) => total,
            Err(CoreError::Arithmetic(_)) => return self.shortfall(Decimal::MAX, available),
            Err(err) => return Err(err),
        };

        let remaining = Amount::new(total)
            .ok()
            .and_then(|total| self.balance.checked_sub(&total));

        match remaining {
            Some(remaining) => {
                let fee = policy.fee_for(amount)?;
                self.balance = remaining;
                Ok(DebitOutcome::Settled(Receipt::new(
                    amount,
                    fee,
                    total,
                    remaining.value(),
                )))
            }
            None => self.shortfall(total, available),
        }
    }

    fn shortfall(&self, total: Decimal, available: Decimal) -> CoreResult<DebitOutcome> {
        match self.kind.failure_mode() {
            FailureMode::Raise => Err(CoreError::insufficient_funds(total, available)),
            FailureMode::Decline => Ok(DebitOutcome::Declined { total, available }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_open_rejects_negative() {
        assert_eq!(
            Purse::open(VariantKind::PayPal, dec!(-5)),
            Err(CoreError::NegativeBalance(dec!(-5)))
        );
        assert!(Purse::open(VariantKind::PayPal, dec!(0)).is_ok());
    }

    #[test]
    fn test_credit_adds_exact_amount() {
        let mut purse = Purse::open(VariantKind::Savings, dec!(1000)).unwrap();
        assert_eq!(purse.credit(dec!(500)).unwrap(), dec!(1500));
        assert_eq!(purse.balance().value(), dec!(1500));
    }

    #[test]
    fn test_credit_rejects_non_positive() {
        let mut purse = Purse::open(VariantKind::CreditCard, dec!(10)).unwrap();
        assert!(purse.credit(dec!(0)).is_err());
        assert!(purse.credit(dec!(-1)).is_err());
        assert_eq!(purse.balance().value(), dec!(10));
    }

    #[test]
    fn test_debit_settles_with_fee() {
        let mut purse = Purse::open(VariantKind::CreditCard, dec!(700)).unwrap();
        let outcome = purse.debit(dec!(100)).unwrap();
        let receipt = outcome.receipt().unwrap();
        assert_eq!(receipt.fee, dec!(2));
        assert_eq!(receipt.total, dec!(102));
        assert_eq!(receipt.balance_after, dec!(598));
        assert_eq!(purse.balance().value(), dec!(598));
    }

    #[test]
    fn test_debit_exact_balance_allowed() {
        let mut purse = Purse::open(VariantKind::BankTransfer, dec!(105)).unwrap();
        assert!(purse.debit(dec!(100)).unwrap().is_settled());
        assert!(purse.balance().is_zero());
    }

    #[test]
    fn test_shortfall_raise() {
        let mut purse = Purse::open(VariantKind::BankTransfer, dec!(104.99)).unwrap();
        let err = purse.debit(dec!(100)).unwrap_err();
        assert_eq!(err, CoreError::insufficient_funds(dec!(105), dec!(104.99)));
        assert_eq!(purse.balance().value(), dec!(104.99));
    }

    #[test]
    fn test_shortfall_decline() {
        let mut purse = Purse::open(VariantKind::Savings, dec!(1500)).unwrap();
        let outcome = purse.debit(dec!(2000)).unwrap();
        assert_eq!(
            outcome,
            DebitOutcome::Declined {
                total: dec!(2020),
                available: dec!(1500)
            }
        );
        assert_eq!(purse.balance().value(), dec!(1500));
    }

    #[test]
    fn test_unrepresentable_total_is_shortfall() {
        let mut purse = Purse::open(VariantKind::Savings, dec!(1000)).unwrap();
        assert_eq!(
            purse.debit(Decimal::MAX).unwrap(),
            DebitOutcome::Declined {
                total: Decimal::MAX,
                available: dec!(1000)
            }
        );

        let mut purse = Purse::open(VariantKind::BankTransfer, dec!(1000)).unwrap();
        assert_eq!(
            purse.debit(Decimal::MAX).unwrap_err(),
            CoreError::insufficient_funds(Decimal::MAX, dec!(1000))
        );
        assert_eq!(purse.balance().value(), dec!(1000));
    }
}

//! Traits for the shared capability set and its two failure conventions.

use crate::error::{CoreError, CoreResult};
use crate::fee::FeePolicy;
use crate::purse::{DebitOutcome, Purse, Receipt};
use crate::variant::{FailureMode, VariantKind};
use rust_decimal::Decimal;

/// Deposit-or-load, withdraw-or-pay and describe-self.
///
/// Implementors only expose their identity and their `Purse`; validation,
/// fees and logging come from the provided methods.
pub trait Account {
    /// Identifying number (account, card, phone, email, ...)
    fn id(&self) -> &str;

    fn purse(&self) -> &Purse;

    fn purse_mut(&mut self) -> &mut Purse;

    /// Human-readable summary of identity and balance.
    fn describe(&self) -> String;

    fn kind(&self) -> VariantKind {
        self.purse().kind()
    }

    fn balance(&self) -> Decimal {
        self.purse().balance().value()
    }

    fn fee_policy(&self) -> FeePolicy {
        self.kind().fee_policy()
    }

    fn failure_mode(&self) -> FailureMode {
        self.kind().failure_mode()
    }

    /// Deposit/load. Returns the new balance.
    fn credit(&mut self, amount: Decimal) -> CoreResult<Decimal> {
        match self.purse_mut().credit(amount) {
            Ok(balance) => {
                tracing::debug!(
                    account = self.id(),
                    variant = %self.kind(),
                    %amount,
                    %balance,
                    "Credit applied"
                );
                Ok(balance)
            }
            Err(err) => {
                tracing::warn!(account = self.id(), %amount, error = %err, "Credit rejected");
                Err(err)
            }
        }
    }

    /// Withdraw/pay with the variant's fee.
    fn debit(&mut self, amount: Decimal) -> CoreResult<DebitOutcome> {
        match self.purse_mut().debit(amount) {
            Ok(DebitOutcome::Settled(receipt)) => {
                tracing::debug!(
                    account = self.id(),
                    variant = %self.kind(),
                    amount = %receipt.amount,
                    fee = %receipt.fee,
                    balance = %receipt.balance_after,
                    "Debit settled"
                );
                Ok(DebitOutcome::Settled(receipt))
            }
            Ok(DebitOutcome::Declined { total, available }) => {
                tracing::warn!(
                    account = self.id(),
                    %total,
                    %available,
                    "Debit declined: insufficient funds"
                );
                Ok(DebitOutcome::Declined { total, available })
            }
            Err(err) => {
                tracing::warn!(account = self.id(), %amount, error = %err, "Debit rejected");
                Err(err)
            }
        }
    }
}

/// Boolean-result convention: a shortfall on `withdraw` is `Ok(false)`.
///
/// Invalid amounts are still errors.
pub trait BankAccount: Account {
    fn deposit(&mut self, amount: Decimal) -> CoreResult<()> {
        self.credit(amount).map(|_| ())
    }

    /// `Ok(true)` when settled, `Ok(false)` when declined.
    fn withdraw(&mut self, amount: Decimal) -> CoreResult<bool> {
        Ok(self.debit(amount)?.is_settled())
    }

    fn account_info(&self) -> String {
        self.describe()
    }
}

/// Throw-style convention: a shortfall on `pay` is `CoreError::InsufficientFunds`.
pub trait PaymentMethod: Account {
    /// Brand or channel name ("Visa", "M-Pesa", ...)
    fn method_name(&self) -> &str;

    fn load(&mut self, amount: Decimal) -> CoreResult<()> {
        self.credit(amount).map(|_| ())
    }

    fn pay(&mut self, amount: Decimal) -> CoreResult<Receipt> {
        match self.debit(amount)? {
            DebitOutcome::Settled(receipt) => Ok(receipt),
            DebitOutcome::Declined { total, available } => {
                Err(CoreError::insufficient_funds(total, available))
            }
        }
    }

    fn payment_info(&self) -> String {
        self.describe()
    }
}

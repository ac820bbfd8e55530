//! Basic account: no fee, a 50 floor on deposits and withdrawals, errors on shortfall.

use crate::error::{CoreError, CoreResult};
use crate::purse::{DebitOutcome, Purse, Receipt};
use crate::traits::Account;
use crate::variant::VariantKind;
use rust_decimal::Decimal;

/// Account whose balance only moves in amounts of roughly 50 or more.
///
/// - deposit rejects `amount <= 49`
/// - withdraw rejects `amount < 50` and any amount above the balance
#[derive(Debug, Clone)]
pub struct BasicAccount {
    id: String,
    purse: Purse,
}

impl BasicAccount {
    pub fn new(id: impl Into<String>, initial_balance: Decimal) -> CoreResult<Self> {
        Ok(Self {
            id: id.into(),
            purse: Purse::open(VariantKind::Basic, initial_balance)?,
        })
    }

    pub fn deposit(&mut self, amount: Decimal) -> CoreResult<Decimal> {
        self.credit(amount)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> CoreResult<Receipt> {
        match self.debit(amount)? {
            DebitOutcome::Settled(receipt) => Ok(receipt),
            DebitOutcome::Declined { total, available } => {
                Err(CoreError::insufficient_funds(total, available))
            }
        }
    }
}

impl Account for BasicAccount {
    fn id(&self) -> &str {
        &self.id
    }

    fn purse(&self) -> &Purse {
        &self.purse
    }

    fn purse_mut(&mut self) -> &mut Purse {
        &mut self.purse
    }

    fn describe(&self) -> String {
        format!("Account {}, Balance: ${:.2}", self.id, self.purse.balance())
    }
}
